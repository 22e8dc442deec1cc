//! Response styling and chunking.
//!
//! Converts one raw assistant reply into the sequence of messages actually
//! delivered to the chat platform: markdown markers are stripped (fenced
//! code blocks are dropped outright), the text is split on blank lines,
//! and oversized paragraphs are force-split at sentence boundaries so no
//! chunk exceeds the platform-friendly length.

use chat_core::Message;

/// Maximum chunk length in Unicode scalar values.
const MAX_CHUNK_CHARS: usize = 400;

/// Punctuation treated as a sentence boundary when force-splitting.
const SENTENCE_TERMINATORS: [char; 7] = ['。', '．', '.', '！', '!', '？', '?'];

/// Sent when styling produces no usable chunk at all.
const FALLBACK_PROMPT: &str = "Could you ask me again?🤔";

/// Turns one raw assistant message into deliverable chunks.
///
/// The output is never empty and every chunk is assistant-role with
/// trimmed, non-empty content no longer than 400 characters plus at most
/// one character absorbed at a force-split boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styler;

impl Styler {
    /// Create a styler.
    pub fn new() -> Self {
        Self
    }

    /// Format a raw reply into ordered deliverable chunks.
    pub fn format(&self, raw: &Message) -> Vec<Message> {
        let cleaned = strip_markdown(&raw.content);

        let mut chunks: Vec<String> = Vec::new();
        for candidate in split_paragraphs(&cleaned) {
            let trimmed = candidate.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.chars().count() <= MAX_CHUNK_CHARS {
                chunks.push(trimmed.to_string());
            } else {
                force_split(trimmed, &mut chunks);
            }
        }

        if chunks.is_empty() {
            chunks.push(FALLBACK_PROMPT.to_string());
        }

        chunks.into_iter().map(Message::assistant).collect()
    }
}

/// Strip lightweight markdown from AI output.
///
/// Emphasis markers are removed with their text kept, leading heading
/// markers are dropped per line, and fenced code blocks are removed
/// entirely. Dropping fence content is deliberate: chat platforms render
/// code blocks poorly, so the reply is reduced to its prose.
fn strip_markdown(text: &str) -> String {
    let text = strip_paired_markers(text, "**");
    let text = strip_paired_markers(&text, "*");
    let text = strip_heading_markers(&text);
    let text = strip_code_fences(&text);
    text.trim().to_string()
}

/// Remove paired occurrences of `marker`, keeping the enclosed text.
/// Unpaired markers are left alone.
fn strip_paired_markers(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(marker) {
        let after = &rest[open + marker.len()..];
        match after.find(marker) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str(&after[..close]);
                rest = &after[close + marker.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Drop leading `#` heading markers (and the whitespace after them) from
/// each line.
fn strip_heading_markers(text: &str) -> String {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        if line.starts_with('#') {
            let stripped = line.trim_start_matches('#');
            lines.push(stripped.trim_start());
        } else {
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Remove fenced code blocks, content included. An unmatched opening
/// fence is left in place.
fn strip_code_fences(text: &str) -> String {
    const FENCE: &str = "```";
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(FENCE) {
        let after = &rest[open + FENCE.len()..];
        match after.find(FENCE) {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &after[close + FENCE.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Split text into paragraph candidates on runs of two or more newlines.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b'\n' {
                j += 1;
            }
            if j - i >= 2 {
                parts.push(&text[start..i]);
                start = j;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Split an oversized paragraph into chunks of at most `MAX_CHUNK_CHARS`
/// characters, cutting at the last sentence terminator before the
/// boundary when one exists. Without a terminator the cut lands right
/// after the boundary, absorbing one extra character.
fn force_split(text: &str, chunks: &mut Vec<String>) {
    let mut remaining: Vec<char> = text.chars().collect();

    while remaining.len() > MAX_CHUNK_CHARS {
        let split_at = remaining[..MAX_CHUNK_CHARS]
            .iter()
            .rposition(|c| SENTENCE_TERMINATORS.contains(c))
            .unwrap_or(MAX_CHUNK_CHARS);

        let head: String = remaining[..=split_at].iter().collect();
        chunks.push(head.trim().to_string());

        let tail: String = remaining[split_at + 1..].iter().collect();
        remaining = tail.trim().chars().collect();
    }

    if !remaining.is_empty() {
        chunks.push(remaining.into_iter().collect());
    }
}
