//! Conversation context loading.

use std::sync::Arc;

use tracing::{debug, info};

use chat_core::{Conversation, ConversationRepository, Message, RepositoryError};

/// Fetches the live conversation for a user, creating one when none is
/// stored.
///
/// A freshly created conversation is seeded with one system message
/// carrying the configured persona text, when that text is non-empty. The
/// loader never persists: the returned value stays transient until a later
/// save.
pub struct ContextLoader {
    repository: Arc<dyn ConversationRepository>,
    system_prompt: Option<String>,
}

impl ContextLoader {
    /// Create a loader. Empty persona text is treated as absent.
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        system_prompt: Option<String>,
    ) -> Self {
        Self {
            repository,
            system_prompt: system_prompt.filter(|p| !p.trim().is_empty()),
        }
    }

    /// Fetch or create the conversation for `user_id`.
    ///
    /// Absence is not an error; only repository failures propagate.
    pub async fn load(&self, user_id: &str) -> Result<Conversation, RepositoryError> {
        if let Some(conversation) = self.repository.get_by_user_id(user_id).await? {
            debug!(user_id, "found existing conversation");
            return Ok(conversation);
        }

        info!(user_id, "creating new conversation context");
        let seed = match &self.system_prompt {
            Some(prompt) => vec![Message::system(prompt.clone())],
            None => Vec::new(),
        };
        Ok(Conversation::with_messages(user_id, seed))
    }
}
