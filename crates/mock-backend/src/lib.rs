//! Mock implementations of the chat relay bot's ports.
//!
//! This crate provides test doubles for the `AiBackend` and `Platform`
//! traits:
//! - `EchoBackend` - Replies with the last user message
//! - `ScriptedBackend` - Replies with a fixed string
//! - `FailingBackend` - Always returns a backend error
//! - `DelayedBackend` - Wraps another backend with artificial delay
//! - `RecordingPlatform` - Captures outbound messages, with programmable
//!   per-send outcomes
//! - `StaticModelProvider` / `FailingModelProvider` - Model catalog doubles
//!
//! # Example
//!
//! ```rust
//! use chat_core::{AiBackend, Message};
//! use mock_backend::ScriptedBackend;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), chat_core::BackendError> {
//!     let backend = ScriptedBackend::new("Hi there");
//!     let reply = backend.generate_reply(&[Message::user("Hello")]).await?;
//!     assert_eq!(reply.content, "Hi there");
//!     Ok(())
//! }
//! ```

mod backends;
mod platform;
mod providers;

pub use backends::{DelayedBackend, EchoBackend, FailingBackend, ScriptedBackend};
pub use platform::RecordingPlatform;
pub use providers::{FailingModelProvider, StaticModelProvider};

// Re-export core types for convenience
pub use chat_core::{async_trait, AiBackend, BackendError, Message, ModelProvider, Platform};
