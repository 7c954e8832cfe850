//! Declarative test builder.
//!
//! Mock endpoints are queued on the builder and created against a fresh mock
//! server during [`TestBuilder::build`].

use mockito::{Mock, ServerGuard};

use crate::{
    context::TestContext,
    error::TestError,
    fixtures::{wikipedia, wolfram},
};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for test environments backed by a mock knowledge-source server.
///
/// Every endpoint is created with an expected request count which
/// [`TestContext::assert_mocks`] verifies.
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
        }
    }

    /// Serve a Wikipedia page summary for `species`
    pub fn with_wikipedia_summary(self, species: &str, expected_requests: usize) -> Self {
        let path = wikipedia::summary_path(species);
        let body = wikipedia::page_summary(species).to_string();

        self.with_mock(move |server| {
            server
                .mock("GET", path.as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create()
        })
    }

    /// Answer Wikipedia lookups for `species` with `status`
    ///
    /// A 404 carries Wikipedia's not-found document, other statuses an empty body.
    pub fn with_wikipedia_status(
        self,
        species: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let path = wikipedia::summary_path(species);
        let body = if status == 404 {
            wikipedia::not_found().to_string()
        } else {
            String::new()
        };

        self.with_mock(move |server| {
            server
                .mock("GET", path.as_str())
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create()
        })
    }

    /// Serve a successful Wolfram|Alpha query result for `species`
    pub fn with_wolfram_result(self, species: &str, expected_requests: usize) -> Self {
        let matcher = wolfram::query_matcher(species);
        let body = wolfram::query_result(species).to_string();

        self.with_mock(move |server| {
            server
                .mock("GET", wolfram::QUERY_PATH)
                .match_query(matcher)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create()
        })
    }

    /// Serve a Wolfram|Alpha result reporting that `species` was not understood
    pub fn with_wolfram_no_result(self, species: &str, expected_requests: usize) -> Self {
        let matcher = wolfram::query_matcher(species);
        let body = wolfram::no_result().to_string();

        self.with_mock(move |server| {
            server
                .mock("GET", wolfram::QUERY_PATH)
                .match_query(matcher)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create()
        })
    }

    /// Register an arbitrary mock endpoint
    pub fn with_mock<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Start the mock server and create every queued endpoint
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        for builder in self.mock_builders {
            let mock = builder(&mut context.server);
            context.mocks.push(mock);
        }

        Ok(context)
    }
}
