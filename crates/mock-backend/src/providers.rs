//! Mock model provider implementations.

use async_trait::async_trait;

use chat_core::{BackendError, ModelProvider};

/// A [`ModelProvider`] that returns a fixed model list.
#[derive(Debug, Clone, Default)]
pub struct StaticModelProvider {
    models: Vec<String>,
}

impl StaticModelProvider {
    /// Create a provider offering the given models.
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: models.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ModelProvider for StaticModelProvider {
    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        Ok(self.models.clone())
    }
}

/// A [`ModelProvider`] whose listing always fails.
#[derive(Debug, Clone, Default)]
pub struct FailingModelProvider;

#[async_trait]
impl ModelProvider for FailingModelProvider {
    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        Err(BackendError::Unavailable("mock outage".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_models() {
        let provider = StaticModelProvider::new(["gpt-4o", "gpt-5-mini"]);
        let models = provider.list_models().await.unwrap();
        assert_eq!(models, vec!["gpt-4o", "gpt-5-mini"]);
    }

    #[tokio::test]
    async fn test_failing_provider_errors() {
        assert!(FailingModelProvider.list_models().await.is_err());
    }
}
