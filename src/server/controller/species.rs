//! Species metadata endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, species::SpeciesMetadata},
    server::{error::Error, model::app::AppState},
};

/// OpenAPI tag grouping the species endpoints
pub static SPECIES_TAG: &str = "species";

/// Find descriptive metadata for a species
///
/// Resolves a scientific or common species name against every configured knowledge
/// source, serving previously resolved names from cache.
///
/// # Responses
/// - 200 (OK): One entry per knowledge source that answered, in no particular order
/// - 400 (Bad Request): No knowledge source could resolve the species
#[utoipa::path(
    get,
    path = "/v1/species/{name}",
    tag = SPECIES_TAG,
    params(
        ("name" = String, Path, description = "Scientific or common species name")
    ),
    responses(
        (status = 200, description = "Metadata for the species", body = Vec<SpeciesMetadata>),
        (status = 400, description = "Unable to find results for the species", body = ErrorDto),
    ),
)]
pub async fn find_species_metadata(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let metadata = state.species_finder.resolve(&name).await?;

    Ok((StatusCode::OK, Json(metadata)))
}
