//! AI provider identifiers and model catalog entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The AI backends the bot can be wired against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiProvider {
    OpenAi,
    Gemini,
    Grok,
    Groq,
}

impl AiProvider {
    /// Stable string identifier. Catalog ordering sorts on this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::Grok => "grok",
            Self::Groq => "groq",
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the aggregated model catalog. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiModel {
    /// Which backend serves this model.
    pub provider: AiProvider,
    /// Backend-specific model identifier, e.g. `gpt-5-mini`.
    pub name: String,
}

impl AiModel {
    /// Create a catalog entry.
    pub fn new(provider: AiProvider, name: impl Into<String>) -> Self {
        Self {
            provider,
            name: name.into(),
        }
    }

    /// Sort key for the deterministic catalog ordering: provider
    /// identifier first, model name second.
    pub fn sort_key(&self) -> (&'static str, &str) {
        (self.provider.as_str(), &self.name)
    }
}

impl PartialOrd for AiModel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AiModel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_identifiers() {
        assert_eq!(AiProvider::OpenAi.as_str(), "openai");
        assert_eq!(AiProvider::Grok.to_string(), "grok");
    }

    #[test]
    fn test_sort_key_orders_by_provider_then_name() {
        let mut models = vec![
            AiModel::new(AiProvider::OpenAi, "gpt-5-mini"),
            AiModel::new(AiProvider::Grok, "grok-4"),
            AiModel::new(AiProvider::OpenAi, "gpt-4o"),
        ];
        models.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        assert_eq!(models[0].name, "grok-4");
        assert_eq!(models[1].name, "gpt-4o");
        assert_eq!(models[2].name, "gpt-5-mini");
    }
}
