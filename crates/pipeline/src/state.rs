//! Conversation state transitions and persistence delegation.

use std::sync::Arc;

use tracing::{debug, error, info};

use chat_core::{Conversation, ConversationRepository, Message};

/// Applies state transitions to conversations and delegates persistence.
///
/// All transitions are copy-on-write: the input conversation is never
/// mutated. Only [`reset_conversation`](Self::reset_conversation) persists
/// as a side effect; everything else leaves saving to an explicit
/// [`save`](Self::save).
pub struct StateManager {
    repository: Arc<dyn ConversationRepository>,
}

impl StateManager {
    /// Create a state manager over the given repository.
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// Append messages to a conversation, returning the new version.
    ///
    /// An empty `new_messages` returns the input unchanged, without
    /// touching `updated_at`.
    pub fn append_messages(
        &self,
        conversation: Conversation,
        new_messages: Vec<Message>,
    ) -> Conversation {
        if new_messages.is_empty() {
            return conversation;
        }
        conversation.appended(new_messages)
    }

    /// Clear a conversation's history, persisting the cleared version
    /// immediately. Identity (`user_id`, `id`) is retained.
    pub async fn reset_conversation(&self, conversation: &Conversation) -> Conversation {
        let cleared = conversation.cleared();
        self.save(&cleared).await;
        info!(user_id = %cleared.user_id, "conversation memory cleared");
        cleared
    }

    /// Persist a conversation. Failure is logged and reported as `false`,
    /// never raised.
    pub async fn save(&self, conversation: &Conversation) -> bool {
        match self.repository.save(conversation).await {
            Ok(()) => {
                debug!(user_id = %conversation.user_id, "conversation state saved");
                true
            }
            Err(e) => {
                error!(user_id = %conversation.user_id, "failed to save conversation: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chat_core::RepositoryError;
    use memory_store::InMemoryStore;

    struct BrokenStore;

    #[async_trait]
    impl ConversationRepository for BrokenStore {
        async fn get_by_user_id(
            &self,
            _user_id: &str,
        ) -> Result<Option<Conversation>, RepositoryError> {
            Err(RepositoryError::Storage("read failed".to_string()))
        }

        async fn save(&self, _conversation: &Conversation) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("write failed".to_string()))
        }
    }

    #[tokio::test]
    async fn test_append_concatenates_in_order() {
        let manager = StateManager::new(Arc::new(InMemoryStore::new()));
        let conv = Conversation::new("user-1").appended(vec![Message::system("persona")]);

        let next = manager.append_messages(
            conv.clone(),
            vec![Message::user("a"), Message::assistant("b")],
        );

        assert_eq!(next.len(), conv.len() + 2);
        assert_eq!(next.messages[0].content, "persona");
        assert_eq!(next.messages[1].content, "a");
        assert_eq!(next.messages[2].content, "b");
        assert!(next.updated_at >= conv.updated_at);
    }

    #[tokio::test]
    async fn test_append_empty_is_identity() {
        let manager = StateManager::new(Arc::new(InMemoryStore::new()));
        let conv = Conversation::new("user-1").appended(vec![Message::user("hi")]);

        let same = manager.append_messages(conv.clone(), Vec::new());
        assert_eq!(same, conv);
    }

    #[tokio::test]
    async fn test_reset_clears_and_persists() {
        let store = Arc::new(InMemoryStore::new());
        let manager = StateManager::new(Arc::clone(&store) as Arc<dyn ConversationRepository>);
        let conv = Conversation::new("user-1").appended(vec![Message::user("hi")]);

        let cleared = manager.reset_conversation(&conv).await;

        assert!(cleared.is_empty());
        assert_eq!(cleared.user_id, conv.user_id);
        assert_eq!(cleared.id, conv.id);

        let stored = store.get_by_user_id("user-1").await.unwrap().unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_save_reports_success() {
        let manager = StateManager::new(Arc::new(InMemoryStore::new()));
        assert!(manager.save(&Conversation::new("user-1")).await);
    }

    #[tokio::test]
    async fn test_save_failure_is_absorbed() {
        let manager = StateManager::new(Arc::new(BrokenStore));
        assert!(!manager.save(&Conversation::new("user-1")).await);
    }

    #[tokio::test]
    async fn test_reset_survives_save_failure() {
        let manager = StateManager::new(Arc::new(BrokenStore));
        let conv = Conversation::new("user-1").appended(vec![Message::user("hi")]);

        // The cleared value is still returned even when persistence failed.
        let cleared = manager.reset_conversation(&conv).await;
        assert!(cleared.is_empty());
    }
}
