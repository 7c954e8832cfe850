use fred::prelude::*;

use crate::{constant::TEST_REDIS_URL, error::TestError};

/// Redis test setup with a unique key prefix
///
/// Each instance namespaces its keys under a unique prefix so tests running in
/// parallel against one Redis never see each other's entries.
pub struct RedisTest {
    pub redis_pool: Pool,
    key_prefix: String,
}

impl RedisTest {
    /// Connect to the test Redis and generate a unique key prefix
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url(TEST_REDIS_URL)?;
        let redis_pool = Pool::new(redis_config, None, None, None, 5)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool,
            key_prefix: Self::generate_unique_prefix(),
        })
    }

    /// Unique key prefix for this test instance
    pub fn key_prefix(&self) -> String {
        self.key_prefix.clone()
    }

    /// Generate a unique key prefix using timestamp and thread ID
    fn generate_unique_prefix() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let thread_id = std::thread::current().id();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        thread_id.hash(&mut hasher);
        let hash = hasher.finish();

        format!("test:{}:{:x}:species:", timestamp, hash)
    }

    /// Remove the given cache keys written under this instance's prefix
    pub async fn cleanup(self, keys: &[&str]) -> Result<(), TestError> {
        let redis_keys: Vec<String> = keys
            .iter()
            .map(|key| format!("{}{}", self.key_prefix, key))
            .collect();

        if !redis_keys.is_empty() {
            self.redis_pool.del::<(), _>(redis_keys).await?;
        }

        Ok(())
    }
}
