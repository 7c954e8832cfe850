//! Errors surfaced by species resolution.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure to resolve a species
#[derive(Error, Debug)]
pub enum SpeciesError {
    /// Every registered provider failed for this species on a cache miss.
    #[error("Failed to find species information for {0:?}: no metadata provider answered")]
    NotFound(String),
}

impl IntoResponse for SpeciesError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref species) => {
                tracing::debug!(species = %species, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "unable to find results".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
