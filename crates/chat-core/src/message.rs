//! Message types for conversation history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The speaker classification of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Persona / instruction messages injected at conversation creation.
    System,
    /// Inbound messages from the platform user.
    User,
    /// AI-generated replies.
    Assistant,
}

impl MessageRole {
    /// Stable string identifier, matching the wire format of the AI APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Who produced this message.
    pub role: MessageRole,
    /// Message text.
    pub content: String,
    /// When the message was constructed.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with the given role and content.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role() {
        assert_eq!(Message::system("s").role, MessageRole::System);
        assert_eq!(Message::user("u").role, MessageRole::User);
        assert_eq!(Message::assistant("a").role, MessageRole::Assistant);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::user("hi");
        let b = Message::user("hi");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(MessageRole::System.as_str(), "system");
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    }
}
