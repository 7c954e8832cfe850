//! Tests for the find_species_metadata endpoint.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use species_finder::{
    model::{api::ErrorDto, species::SpeciesMetadata},
    server::{controller::species::find_species_metadata, router},
};
use tower::ServiceExt;

use super::*;

/// Tests a successful lookup through the router.
///
/// Expected: 200 OK with a JSON array holding one record per source
#[tokio::test]
async fn success_returns_metadata_array() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_summary(TEST_SPECIES, 1)
        .with_wolfram_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let app = router::routes().with_state(test.into_app_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/species/Canis%20lupus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let metadata: Vec<SpeciesMetadata> = serde_json::from_slice(&body).unwrap();
    assert_eq!(metadata.len(), 2);
    assert!(metadata.iter().all(|m| m.species == TEST_SPECIES));
    test.assert_mocks();

    Ok(())
}

/// Tests the JSON field names of the response body.
///
/// Expected: records carry species, source, link, name, image_path and summary
#[tokio::test]
async fn response_uses_snake_case_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_summary(TEST_SPECIES, 1)
        .with_wolfram_no_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let app = router::routes().with_state(test.into_app_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/species/Canis%20lupus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let record = &json[0];
    for field in ["species", "source", "link", "name", "image_path", "summary"] {
        assert!(record.get(field).is_some(), "missing field {}", field);
    }

    Ok(())
}

/// Tests the failure mapping when no source knows the species.
///
/// Expected: 400 Bad Request with an error body
#[tokio::test]
async fn no_results_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_status(TEST_SPECIES, 404, 1)
        .with_wolfram_no_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let app = router::routes().with_state(test.into_app_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/species/Canis%20lupus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "unable to find results");
    test.assert_mocks();

    Ok(())
}

/// Tests the handler directly, bypassing the router.
///
/// Expected: Err which maps to 400 Bad Request
#[tokio::test]
async fn handler_error_maps_to_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_status(TEST_SPECIES, 500, 1)
        .with_wolfram_no_result(TEST_SPECIES, 1)
        .build()
        .await?;

    let result = find_species_metadata(
        State(test.into_app_state()),
        Path(TEST_SPECIES.to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
