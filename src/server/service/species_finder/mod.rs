//! Species metadata resolution.
//!
//! [`SpeciesFinder`] is the cache-aside orchestrator behind the species API. A
//! request is first looked up in the [`SpeciesCache`] under its normalized key;
//! on a miss every registered [`MetadataProvider`] is queried concurrently and
//! the answers of the providers that succeeded are aggregated, cached and
//! returned.
//!
//! Provider failures degrade the result instead of failing it: a request only
//! fails when no provider answered at all, and in that case nothing is cached so
//! the next request tries every provider again.

#[cfg(test)]
mod tests;

use std::{sync::Arc, time::Duration};

use futures::future::join_all;

use crate::{
    model::species::SpeciesMetadata,
    server::{
        cache::{normalize_key, SpeciesCache},
        error::{provider::ProviderError, species::SpeciesError},
        provider::MetadataProvider,
    },
};

/// Resolves species names to aggregated metadata.
///
/// Checks the cache first and on a miss queries every registered provider
/// concurrently, caching the aggregate when at least one provider answered.
pub struct SpeciesFinder {
    cache: Arc<dyn SpeciesCache>,
    providers: Vec<Arc<dyn MetadataProvider>>,
    /// Deadline applied to each provider call individually
    provider_timeout: Option<Duration>,
}

impl SpeciesFinder {
    /// Creates a new instance of [`SpeciesFinder`] without a provider deadline
    pub fn new(cache: Arc<dyn SpeciesCache>, providers: Vec<Arc<dyn MetadataProvider>>) -> Self {
        Self {
            cache,
            providers,
            provider_timeout: None,
        }
    }

    /// Bound how long each provider call may take before it counts as failed
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = Some(timeout);
        self
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Resolve `name` to the metadata of every provider that knows about it
    ///
    /// Cached aggregates are returned as-is without calling any provider. On a
    /// miss, providers are called with `name` exactly as given and the non-empty
    /// aggregate is cached under the normalized key before being returned.
    ///
    /// # Returns
    /// - `Ok(Vec<SpeciesMetadata>)` - Cached aggregate, or one record per provider that answered
    /// - `Err(SpeciesError::NotFound)` - The cache missed and every provider failed
    pub async fn resolve(&self, name: &str) -> Result<Vec<SpeciesMetadata>, SpeciesError> {
        let key = normalize_key(name);

        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(species = %name, key = %key, "Species metadata served from cache");
            return Ok(cached);
        }

        let metadata = self.fetch_from_providers(name).await;

        if metadata.is_empty() {
            tracing::error!(
                species = %name,
                providers = self.providers.len(),
                "No metadata provider answered"
            );
            return Err(SpeciesError::NotFound(name.to_string()));
        }

        self.cache.put(&key, &metadata).await;

        Ok(metadata)
    }

    /// Call every provider concurrently and keep the successful answers
    ///
    /// Each call resolves into its own slot; slots are merged only after all
    /// calls have finished, so no state is shared between the calls.
    async fn fetch_from_providers(&self, name: &str) -> Vec<SpeciesMetadata> {
        let calls = self
            .providers
            .iter()
            .map(|provider| self.fetch_from_provider(provider.as_ref(), name));

        join_all(calls)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn fetch_from_provider(
        &self,
        provider: &dyn MetadataProvider,
        name: &str,
    ) -> Option<SpeciesMetadata> {
        let result = match self.provider_timeout {
            Some(timeout) => tokio::time::timeout(timeout, provider.fetch_metadata(name))
                .await
                .unwrap_or_else(|_| {
                    Err(ProviderError::Timeout {
                        provider: provider.name(),
                        timeout,
                    })
                }),
            None => provider.fetch_metadata(name).await,
        };

        match result {
            Ok(metadata) => {
                tracing::debug!(species = %name, provider = provider.name(), "Provider answered");
                Some(metadata)
            }
            Err(e) => {
                tracing::warn!(species = %name, provider = provider.name(), "Provider failed: {}", e);
                None
            }
        }
    }
}
