//! Conversation processing pipeline for the chat relay bot.
//!
//! This crate turns one inbound `(user_id, text)` pair into zero or more
//! outbound platform messages, mediated by whichever [`AiBackend`]
//! implementation it was wired with, while keeping a per-user conversation
//! history in the configured repository.
//!
//! # Architecture
//!
//! ```text
//! Inbound (user_id, text)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         PIPELINE                            │
//! │                                                             │
//! │  1. ContextLoader: fetch or create the conversation         │
//! │         ↓                                                   │
//! │  2. Reset command? → clear history (self-persisting),       │
//! │     dispatch one confirmation, done (no AI call)            │
//! │         ↓                                                   │
//! │  3. StateManager: append the user message (in memory)       │
//! │         ↓                                                   │
//! │  4. AiOrchestrator: one raw reply → Styler → chunks         │
//! │     (backend failure degrades to zero chunks)               │
//! │         ↓                                                   │
//! │  5. StateManager: append replies, save the conversation     │
//! │         ↓                                                   │
//! │  6. Dispatcher: best-effort ordered send, success tally     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps run strictly sequentially; the only fan-out in the system lives
//! in the `model-catalog` crate. There is no mutual exclusion across
//! concurrent invocations for the same user: both can load the same prior
//! state and the later save wins (see `Pipeline` docs).
//!
//! [`AiBackend`]: chat_core::AiBackend

mod ai;
mod config;
mod context;
mod dispatcher;
mod error;
mod pipeline;
mod state;
mod styler;

pub use ai::AiOrchestrator;
pub use config::BotConfig;
pub use context::ContextLoader;
pub use dispatcher::Dispatcher;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use state::StateManager;
pub use styler::Styler;

// Re-export core types for convenience
pub use chat_core::{Conversation, Message, MessageRole};
