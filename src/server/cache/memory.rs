//! In-process [`SpeciesCache`](super::SpeciesCache).

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{model::species::SpeciesMetadata, server::cache::SpeciesCache};

/// Unbounded in-process cache without expiry.
///
/// Entries are held as serialized JSON so that what is read back is always a
/// fresh copy of what was written, matching the networked cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SpeciesCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<SpeciesMetadata>> {
        let Some(raw) = self.entries.read().get(key).cloned() else {
            tracing::debug!(key = %key, "Cache miss");
            return None;
        };

        match serde_json::from_str(&raw) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::warn!(key = %key, "Failed to decode cached species metadata: {}", e);
                None
            }
        }
    }

    async fn put(&self, key: &str, metadata: &[SpeciesMetadata]) {
        let raw = match serde_json::to_string(metadata) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %key, "Failed to encode species metadata for cache: {}", e);
                return;
            }
        };

        self.entries.write().insert(key.to_string(), raw);
    }
}
