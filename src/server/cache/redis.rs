//! Redis/Valkey backed [`SpeciesCache`](super::SpeciesCache).

use std::time::Duration;

use async_trait::async_trait;
use fred::{prelude::*, types::Expiration};

use crate::{model::species::SpeciesMetadata, server::cache::SpeciesCache};

const DEFAULT_KEY_PREFIX: &str = "species-finder:metadata:";

/// Entries are evicted by Redis itself after two weeks
const DEFAULT_TTL: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Cache backed by a shared Redis/Valkey instance.
///
/// Every write carries a fixed TTL so stale metadata ages out without an
/// explicit invalidation path. Concurrency is handled by the `fred` pool.
pub struct RedisCache {
    pool: Pool,
    /// Namespace for keys (allows isolating tests and sharing an instance)
    prefix: String,
    ttl: Duration,
}

impl RedisCache {
    /// Creates a cache over `pool` with the default prefix and TTL
    pub fn new(pool: Pool) -> Self {
        Self {
            pool,
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Use a custom key prefix (useful for testing)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the TTL applied to every write
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// TTL applied to every write
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn redis_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl SpeciesCache for RedisCache {
    async fn get(&self, key: &str) -> Option<Vec<SpeciesMetadata>> {
        let redis_key = self.redis_key(key);

        let raw = match self.pool.get::<Option<String>, _>(redis_key.as_str()).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %redis_key, "Failed to read species metadata from cache: {}", e);
                return None;
            }
        };

        let Some(raw) = raw else {
            tracing::debug!(key = %redis_key, "Cache miss");
            return None;
        };

        match serde_json::from_str(&raw) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::warn!(key = %redis_key, "Failed to decode cached species metadata: {}", e);
                None
            }
        }
    }

    async fn put(&self, key: &str, metadata: &[SpeciesMetadata]) {
        let redis_key = self.redis_key(key);

        let raw = match serde_json::to_string(metadata) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %redis_key, "Failed to encode species metadata for cache: {}", e);
                return;
            }
        };

        let ttl_ms = self.ttl.as_millis().clamp(1, i64::MAX as u128) as i64;
        let result: Result<(), Error> = self
            .pool
            .set(redis_key.as_str(), raw, Some(Expiration::PX(ttl_ms)), None, false)
            .await;

        if let Err(e) = result {
            tracing::warn!(key = %redis_key, "Failed to write species metadata to cache: {}", e);
        }
    }
}
