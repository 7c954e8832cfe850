//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds the mock server standing in for every knowledge source, the endpoints
//! registered on it, and an HTTP client configured for tests.

use mockito::{Mock, Server, ServerGuard};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test environment for provider and resolver tests
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_wikipedia_summary(TEST_SPECIES, 1)
///     .build()
///     .await?;
///
/// let provider = WikipediaProvider::new(test.http_client.clone())
///     .with_base_url(test.base_url());
///
/// // ... exercise code under test ...
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// HTTP client for providers under test
    pub http_client: reqwest::Client,

    /// Mock HTTP server shared by every knowledge source
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let http_client = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, usable as any provider's API root
    pub fn base_url(&self) -> String {
        self.server.url()
    }

    /// Access the mock server to register additional endpoints mid-test
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
