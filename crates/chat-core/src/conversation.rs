//! Immutable conversation state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::Message;

/// The complete, ordered message history and metadata for one user.
///
/// Conversations are immutable values: every state transition builds a new
/// `Conversation` via one of the copy constructors below, leaving the
/// original untouched. `updated_at` is non-decreasing across versions
/// derived from the same conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// The platform user this conversation belongs to. One live
    /// conversation per user.
    pub user_id: String,
    /// Opaque identifier, stable across resets.
    pub id: Uuid,
    /// Messages in insertion order. Never reordered.
    pub messages: Vec<Message>,
    /// When the conversation was first created.
    pub created_at: DateTime<Utc>,
    /// When the conversation was last derived from.
    pub updated_at: DateTime<Utc>,
    /// Model name the user has pinned for this conversation, if any.
    pub selected_model: Option<String>,
}

impl Conversation {
    /// Create a new, empty conversation for a user.
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            id: Uuid::new_v4(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            selected_model: None,
        }
    }

    /// Create a new conversation seeded with the given messages.
    pub fn with_messages(user_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::new(user_id)
        }
    }

    /// A copy of this conversation with the given messages appended and
    /// `updated_at` refreshed.
    pub fn appended(&self, new_messages: Vec<Message>) -> Self {
        let mut messages = self.messages.clone();
        messages.extend(new_messages);
        Self {
            messages,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// A copy of this conversation with the history cleared. Identity
    /// (`user_id`, `id`) is retained; `updated_at` is refreshed.
    pub fn cleared(&self) -> Self {
        Self {
            messages: Vec::new(),
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// A copy of this conversation with the pinned model name replaced.
    pub fn with_selected_model(&self, model: impl Into<String>) -> Self {
        Self {
            selected_model: Some(model.into()),
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
