//! Port traits between the pipeline core and its external collaborators.
//!
//! Each adapter implements exactly one of these traits; the core depends
//! only on the trait, never on a concrete adapter. All traits are
//! object-safe and can be used behind `Arc<dyn ...>`.

use async_trait::async_trait;

use crate::conversation::Conversation;
use crate::error::{BackendError, RepositoryError};
use crate::message::Message;

/// An AI backend that turns a conversation history into one reply.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Generate exactly one assistant-role reply for the given history.
    ///
    /// # Arguments
    ///
    /// * `messages` - The full conversation history, oldest first.
    async fn generate_reply(&self, messages: &[Message]) -> Result<Message, BackendError>;

    /// Human-readable name of this backend implementation.
    fn name(&self) -> &str;
}

/// The outbound messaging platform.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Send one message to a user.
    ///
    /// Returns `true` on delivery success. Ordinary delivery failures are
    /// reported as `false`, never as an error.
    async fn send_message(&self, user_id: &str, message: &Message) -> bool;
}

/// Persistence for conversation state.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Look up the live conversation for a user. Absence is not an error.
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Conversation>, RepositoryError>;

    /// Persist a conversation, replacing any stored version for the same
    /// user.
    async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError>;
}

/// Model listing for a single AI provider.
///
/// The catalog aggregator holds one of these per configured provider and
/// queries them concurrently.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// List the model identifiers this provider currently offers.
    async fn list_models(&self) -> Result<Vec<String>, BackendError>;
}
