//! Mock AI backend implementations.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use chat_core::{AiBackend, BackendError, Message, MessageRole};

/// A backend that echoes the last user message back.
///
/// Useful for exercising the full pipeline without any AI processing.
#[derive(Debug, Clone, Default)]
pub struct EchoBackend {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoBackend {
    /// Create an EchoBackend with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an EchoBackend with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_backend::EchoBackend;
    ///
    /// let backend = EchoBackend::with_prefix("Echo: ");
    /// // Will reply with "Echo: <last user message>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl AiBackend for EchoBackend {
    async fn generate_reply(&self, messages: &[Message]) -> Result<Message, BackendError> {
        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let content = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, last_user),
            None => last_user.to_string(),
        };

        Ok(Message::assistant(content))
    }

    fn name(&self) -> &str {
        "EchoBackend"
    }
}

/// A backend that always replies with the same fixed string.
#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    reply: String,
}

impl ScriptedBackend {
    /// Create a backend that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl AiBackend for ScriptedBackend {
    async fn generate_reply(&self, _messages: &[Message]) -> Result<Message, BackendError> {
        Ok(Message::assistant(self.reply.clone()))
    }

    fn name(&self) -> &str {
        "ScriptedBackend"
    }
}

/// A backend that always fails.
///
/// Useful for testing the pipeline's degradation path on backend outage.
#[derive(Debug, Clone, Default)]
pub struct FailingBackend;

impl FailingBackend {
    /// Create a FailingBackend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AiBackend for FailingBackend {
    async fn generate_reply(&self, _messages: &[Message]) -> Result<Message, BackendError> {
        Err(BackendError::Unavailable("mock outage".to_string()))
    }

    fn name(&self) -> &str {
        "FailingBackend"
    }
}

/// A backend that wraps another backend and adds artificial delay.
///
/// Useful for simulating AI processing latency.
pub struct DelayedBackend<B: AiBackend> {
    inner: B,
    delay: Duration,
}

impl<B: AiBackend> DelayedBackend<B> {
    /// Wrap `inner` with the given delay.
    pub fn new(inner: B, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap `inner` with a delay in milliseconds.
    pub fn with_millis(inner: B, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<B: AiBackend> AiBackend for DelayedBackend<B> {
    async fn generate_reply(&self, messages: &[Message]) -> Result<Message, BackendError> {
        sleep(self.delay).await;
        self.inner.generate_reply(messages).await
    }

    fn name(&self) -> &str {
        "DelayedBackend"
    }
}
