//! Configuration errors raised while reading the environment.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures, one per rejected environment variable
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is required by the selected configuration but unset or blank
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Variable is set but its value was rejected
    #[error("Invalid value {value:?} for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// Raw value as read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(var: &str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
