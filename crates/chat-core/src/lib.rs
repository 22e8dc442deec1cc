//! Core types and port traits for the chat relay bot.
//!
//! This crate provides the shared interface between the conversation
//! pipeline and its external collaborators. It defines:
//!
//! - [`Conversation`] / [`Message`] - Immutable conversation state
//! - [`AiBackend`] - The trait every AI provider adapter implements
//! - [`Platform`] - The trait for the outbound messaging platform
//! - [`ConversationRepository`] - The trait for conversation persistence
//! - [`ModelProvider`] - The per-provider model listing trait
//! - [`BackendError`] / [`RepositoryError`] / [`ConfigError`] - Error types
//!
//! # Example
//!
//! ```rust
//! use chat_core::{AiBackend, BackendError, Message};
//! use async_trait::async_trait;
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl AiBackend for MyBackend {
//!     async fn generate_reply(&self, messages: &[Message]) -> Result<Message, BackendError> {
//!         let _ = messages;
//!         Ok(Message::assistant("Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBackend"
//!     }
//! }
//! ```

mod conversation;
mod error;
mod message;
mod model;
mod ports;

pub use conversation::Conversation;
pub use error::{BackendError, ConfigError, RepositoryError};
pub use message::{Message, MessageRole};
pub use model::{AiModel, AiProvider};
pub use ports::{AiBackend, ConversationRepository, ModelProvider, Platform};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
