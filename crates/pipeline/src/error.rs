//! Pipeline error type.

use thiserror::Error;

use chat_core::RepositoryError;

/// Errors surfaced by [`Pipeline::execute`](crate::Pipeline::execute).
///
/// Only the initial conversation load can fail the invocation; every other
/// operational failure (backend outage, delivery failure, save failure) is
/// absorbed and logged at the component that owns the external call.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The repository failed while loading the conversation.
    #[error("failed to load conversation: {0}")]
    Load(#[from] RepositoryError),
}
