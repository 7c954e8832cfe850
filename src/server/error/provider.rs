//! Errors raised by individual metadata providers.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single metadata provider call.
///
/// The resolver treats every variant the same way: the provider is left out
/// of the aggregate and the remaining providers still count.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure or unreadable response body.
    #[error("Request to {provider} failed: {source}")]
    Request {
        /// Name of the provider that failed
        provider: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// The source answered with a non-success status or reported an error.
    #[error("{provider} returned an error (status {status}): {message}")]
    Api {
        /// Name of the provider that failed
        provider: &'static str,
        /// HTTP status, or 200 when the error was reported in the body
        status: u16,
        /// Error text returned by the source
        message: String,
    },
    /// The source reported that it has nothing for this species.
    #[error("{provider} has no entry for species {species:?}")]
    NotFound {
        /// Name of the provider that failed
        provider: &'static str,
        /// Species name as requested
        species: String,
    },
    /// The response body did not match the expected document shape.
    #[error("Failed to decode {provider} response: {source}")]
    Decode {
        /// Name of the provider that failed
        provider: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
    /// The request URL could not be built from the configured base URL.
    #[error("Invalid {provider} URL {url:?}: {reason}")]
    InvalidUrl {
        /// Name of the provider that failed
        provider: &'static str,
        /// URL that was rejected
        url: String,
        /// Why the URL was rejected
        reason: String,
    },
    /// The provider did not answer within the resolver's deadline.
    #[error("{provider} did not respond within {timeout:?}")]
    Timeout {
        /// Name of the provider that failed
        provider: &'static str,
        /// Deadline that elapsed
        timeout: Duration,
    },
}
