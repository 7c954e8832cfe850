//! Constant values shared across tests.

/// User agent for HTTP clients talking to the mock server
pub static TEST_USER_AGENT: &str = "species-finder-tests/0.1 (+https://example.com/species-finder)";

/// Placeholder Wolfram|Alpha app ID, not a real credential
pub static TEST_WOLFRAM_APP_ID: &str = "test-wolfram-app-id";

/// Species used by most tests
pub static TEST_SPECIES: &str = "Canis lupus";

/// Redis instance used by tests behind the `redis-test` feature
pub static TEST_REDIS_URL: &str = "redis://127.0.0.1:6379";
