//! Cache storage for aggregated species metadata.
//!
//! The resolver reads and writes through the [`SpeciesCache`] trait and is handed
//! whichever implementation the deployment chooses at construction time:
//!
//! - [`MemoryCache`]: in-process map, no expiry, lost on restart
//! - [`RedisCache`]: shared Redis/Valkey instance, every entry written with a TTL
//!
//! A cache is an optimization rather than a source of truth, so neither operation
//! returns an error. Implementations log their faults and report a read fault as
//! a miss.

pub mod memory;
pub mod redis;

pub use memory::MemoryCache;
pub use redis::RedisCache;

use async_trait::async_trait;

use crate::model::species::SpeciesMetadata;

/// Key-value store mapping a normalized species key to an aggregated result.
///
/// Keys passed in are expected to already be normalized with [`normalize_key`].
#[async_trait]
pub trait SpeciesCache: Send + Sync {
    /// Look up the aggregate stored under `key`
    ///
    /// Returns `None` on a miss and on any internal fault (connectivity,
    /// undecodable entry). A stored empty aggregate is a hit and returns
    /// `Some(vec![])`.
    async fn get(&self, key: &str) -> Option<Vec<SpeciesMetadata>>;

    /// Store `metadata` under `key`, replacing any previous entry
    ///
    /// Failures are logged and otherwise ignored.
    async fn put(&self, key: &str, metadata: &[SpeciesMetadata]);
}

/// Derive the cache key for a requested species name.
///
/// Lower-cases the name and strips spaces, `+`, `-` and `_` so that
/// "Canis Lupus", "canis-lupus" and "CANIS_LUPUS" share one entry.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '+' | '-' | '_'))
        .collect()
}
