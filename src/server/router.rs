//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI definitions, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /v1/species/{name}` - Resolve metadata for a species
///
/// # OpenAPI Documentation
/// The OpenAPI document is available at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// Every route answers cross-origin requests from any origin and is wrapped in a
/// request trace span.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { species_finder });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Species Finder", description = "Species metadata API"), tags(
        (name = controller::species::SPECIES_TAG, description = "Species metadata API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::species::find_species_metadata))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
