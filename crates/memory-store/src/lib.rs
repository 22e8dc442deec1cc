//! In-memory conversation repository.
//!
//! This crate provides [`InMemoryStore`], a [`ConversationRepository`]
//! backed by a process-local map. Conversations are lost when the process
//! exits; use it for development, tests, and single-instance deployments
//! where durability does not matter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use chat_core::{Conversation, ConversationRepository, RepositoryError};

/// A [`ConversationRepository`] backed by a `HashMap` keyed by user id.
///
/// The lock protects map integrity only. It does not serialize
/// load-modify-save cycles across concurrent pipeline invocations for the
/// same user; the later save wins.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    store: RwLock<HashMap<String, Conversation>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        warn!("using InMemoryStore; conversation data is not persistent");
        Self::default()
    }

    /// Number of stored conversations.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryStore {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Conversation>, RepositoryError> {
        debug!(user_id, "looking up conversation in memory");
        Ok(self.store.read().await.get(user_id).cloned())
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        debug!(user_id = %conversation.user_id, "saving conversation in memory");
        self.store
            .write()
            .await
            .insert(conversation.user_id.clone(), conversation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::Message;

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryStore::new();
        let found = store.get_by_user_id("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = InMemoryStore::new();
        let conv = Conversation::new("user-1").appended(vec![Message::user("hello")]);

        store.save(&conv).await.unwrap();
        let found = store.get_by_user_id("user-1").await.unwrap().unwrap();

        assert_eq!(found.id, conv.id);
        assert_eq!(found.len(), 1);
        assert_eq!(found.messages[0].content, "hello");
    }

    #[tokio::test]
    async fn test_save_replaces_previous_version() {
        let store = InMemoryStore::new();
        let conv = Conversation::new("user-1");
        store.save(&conv).await.unwrap();

        let next = conv.appended(vec![Message::user("again")]);
        store.save(&next).await.unwrap();

        let found = store.get_by_user_id("user-1").await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(store.len().await, 1);
    }
}
