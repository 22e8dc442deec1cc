//! Error types shared across the workspace.

use thiserror::Error;

/// Errors raised by AI backend and model provider adapters.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The provider API rejected or failed the call.
    #[error("backend API error: {0}")]
    Api(String),

    /// The call did not complete within the configured timeout.
    #[error("backend call timed out")]
    Timeout,

    /// The backend is temporarily unavailable.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by conversation repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Construction-time configuration errors. These are the only errors
/// allowed to surface as hard failures; they are raised while wiring the
/// object graph, never during request handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential or mapping is missing.
    #[error("missing configuration: {0}")]
    Missing(String),

    /// A configuration value could not be parsed.
    #[error("invalid configuration value for {key}: {value}")]
    Invalid { key: String, value: String },
}
