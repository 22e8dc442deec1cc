//! Concurrent model catalog aggregation.
//!
//! This crate provides [`ModelCatalog`], which queries every configured AI
//! provider for its available models concurrently and merges the results
//! into one deterministically ordered list. Providers are registered at
//! composition time (only those with credentials); one provider failing
//! never affects its siblings and never fails the aggregate call.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use chat_core::{AiModel, AiProvider, ModelProvider};

/// Aggregates model listings across all configured providers.
///
/// Each registered provider is queried on its own task; a provider whose
/// fetch fails (or whose task panics) contributes nothing and is logged,
/// while the remaining providers' results are still merged. The merged
/// list is sorted by (provider identifier, model name) so repeated calls
/// with the same provider state produce the same ordering.
#[derive(Default)]
pub struct ModelCatalog {
    providers: Vec<(AiProvider, Arc<dyn ModelProvider>)>,
}

impl ModelCatalog {
    /// Create a catalog with no providers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. Call once per backend that has credentials
    /// configured.
    pub fn with_provider(mut self, provider: AiProvider, port: Arc<dyn ModelProvider>) -> Self {
        self.providers.push((provider, port));
        self
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Fetch the union of all providers' model lists.
    ///
    /// Returns immediately with an empty list when no provider is
    /// registered. Otherwise spawns one task per provider, waits for all
    /// of them, and merges whatever succeeded.
    pub async fn list_models(&self) -> Vec<AiModel> {
        if self.providers.is_empty() {
            warn!("no AI providers configured; model catalog is empty");
            return Vec::new();
        }

        info!(
            providers = self.providers.len(),
            "fetching model lists from all configured providers"
        );

        let mut tasks = JoinSet::new();
        for (provider, port) in &self.providers {
            let provider = *provider;
            let port = Arc::clone(port);
            tasks.spawn(async move { fetch_provider_models(provider, port).await });
        }

        let mut all_models = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(models) => all_models.extend(models),
                Err(e) => error!("model fetch task failed to complete: {}", e),
            }
        }

        all_models.sort();
        info!(total = all_models.len(), "merged model catalog");
        all_models
    }
}

/// Query one provider, absorbing its failure as an empty contribution.
async fn fetch_provider_models(
    provider: AiProvider,
    port: Arc<dyn ModelProvider>,
) -> Vec<AiModel> {
    debug!(provider = %provider, "fetching models");
    match port.list_models().await {
        Ok(names) => {
            info!(provider = %provider, count = names.len(), "provider returned models");
            names
                .into_iter()
                .map(|name| AiModel::new(provider, name))
                .collect()
        }
        Err(e) => {
            error!(provider = %provider, "model listing failed: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chat_core::BackendError;
    use std::time::Duration;

    struct FixedProvider {
        models: Vec<&'static str>,
        delay: Duration,
    }

    impl FixedProvider {
        fn new(models: Vec<&'static str>) -> Self {
            Self {
                models,
                delay: Duration::ZERO,
            }
        }

        fn slow(models: Vec<&'static str>, delay: Duration) -> Self {
            Self { models, delay }
        }
    }

    #[async_trait]
    impl ModelProvider for FixedProvider {
        async fn list_models(&self) -> Result<Vec<String>, BackendError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.models.iter().map(|m| m.to_string()).collect())
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl ModelProvider for BrokenProvider {
        async fn list_models(&self) -> Result<Vec<String>, BackendError> {
            Err(BackendError::Api("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_empty_catalog_returns_immediately() {
        let catalog = ModelCatalog::new();
        assert_eq!(catalog.provider_count(), 0);
        assert!(catalog.list_models().await.is_empty());
    }

    #[tokio::test]
    async fn test_merges_and_sorts_across_providers() {
        let catalog = ModelCatalog::new()
            .with_provider(
                AiProvider::OpenAi,
                Arc::new(FixedProvider::new(vec!["gpt-5-mini", "gpt-4o"])),
            )
            .with_provider(
                AiProvider::Grok,
                Arc::new(FixedProvider::slow(
                    vec!["grok-4"],
                    Duration::from_millis(20),
                )),
            );

        let models = catalog.list_models().await;
        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();

        // grok sorts before openai; names sort within a provider.
        assert_eq!(names, vec!["grok-4", "gpt-4o", "gpt-5-mini"]);
        assert_eq!(models[0].provider, AiProvider::Grok);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_surviving_providers() {
        let catalog = ModelCatalog::new()
            .with_provider(AiProvider::OpenAi, Arc::new(BrokenProvider))
            .with_provider(
                AiProvider::Grok,
                Arc::new(FixedProvider::new(vec!["grok-4", "grok-3-mini"])),
            );

        let models = catalog.list_models().await;
        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, vec!["grok-3-mini", "grok-4"]);
        assert!(models.iter().all(|m| m.provider == AiProvider::Grok));
    }

    #[tokio::test]
    async fn test_all_providers_failing_yields_empty() {
        let catalog = ModelCatalog::new()
            .with_provider(AiProvider::OpenAi, Arc::new(BrokenProvider))
            .with_provider(AiProvider::Grok, Arc::new(BrokenProvider));

        assert!(catalog.list_models().await.is_empty());
    }
}
