//! Error types for the species-finder server.
//!
//! Each domain has its own `thiserror` enum (configuration, metadata providers,
//! species resolution) and all of them roll up into [`Error`], which implements
//! `IntoResponse` so handlers can return it directly with `?`.
//!
//! Cache faults deliberately have no error type: the cache layer logs them and
//! reports absence instead.

pub mod config;
pub mod provider;
pub mod species;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, provider::ProviderError, species::SpeciesError},
};

/// Main error type for the species-finder server.
///
/// Aggregates the domain-specific error types and the external library errors
/// encountered during startup into a single type, with `#[from]` conversions so
/// `?` works across layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Species resolution error, the only failure the resolver exposes upward.
    #[error(transparent)]
    SpeciesError(#[from] SpeciesError),
    /// Metadata provider error.
    ///
    /// The resolver never surfaces these; they only reach this type when a
    /// provider is called directly.
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Redis/Valkey client error (connection, command execution).
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - When no provider could resolve the requested species
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::SpeciesError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
