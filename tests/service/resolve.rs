//! Tests for SpeciesFinder::resolve with real providers against a mock server.
//!
//! These tests verify the resolver's end-to-end behavior: aggregation of both
//! knowledge sources, degraded results when one source fails, failure when all
//! sources fail, and that cached results do not reach the sources again.

use std::sync::Arc;

use species_finder::server::{cache::MemoryCache, error::species::SpeciesError};

use super::*;

/// Tests aggregation of both knowledge sources.
///
/// Expected: Ok with one record per source, each echoing the requested name
#[tokio::test]
async fn aggregates_wikipedia_and_wolfram() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_summary(TEST_SPECIES, 1)
        .with_wolfram_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let finder = test.species_finder(Arc::new(MemoryCache::new()));

    let result = finder.resolve(TEST_SPECIES).await;

    assert!(result.is_ok());
    let metadata = result.unwrap();
    assert_eq!(metadata.len(), 2);

    let wiki = metadata.iter().find(|m| m.source == "wikipedia").unwrap();
    assert_eq!(wiki.species, TEST_SPECIES);
    assert_eq!(wiki.name, TEST_SPECIES);
    assert_eq!(wiki.link, wikipedia::page_link(TEST_SPECIES));
    assert_eq!(wiki.image_path, wikipedia::image_link(TEST_SPECIES));

    let wolfram_record = metadata.iter().find(|m| m.source == "wolframalpha").unwrap();
    assert_eq!(wolfram_record.species, TEST_SPECIES);
    assert_eq!(wolfram_record.name, wolfram::common_name(TEST_SPECIES));
    assert_eq!(wolfram_record.summary, wolfram::expected_summary());

    test.assert_mocks();

    Ok(())
}

/// Tests that a failing source degrades the result rather than failing it.
///
/// Expected: Ok with only the Wolfram|Alpha record
#[tokio::test]
async fn wikipedia_outage_returns_wolfram_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_status(TEST_SPECIES, 503, 1)
        .with_wolfram_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let finder = test.species_finder(Arc::new(MemoryCache::new()));

    let metadata = finder.resolve(TEST_SPECIES).await.unwrap();

    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].source, "wolframalpha");
    test.assert_mocks();

    Ok(())
}

/// Tests that a source reporting absence is treated as a failed source.
///
/// Expected: Ok with only the Wikipedia record
#[tokio::test]
async fn wolfram_without_result_returns_wikipedia_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_summary(TEST_SPECIES, 1)
        .with_wolfram_no_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let finder = test.species_finder(Arc::new(MemoryCache::new()));

    let metadata = finder.resolve(TEST_SPECIES).await.unwrap();

    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].source, "wikipedia");
    test.assert_mocks();

    Ok(())
}

/// Tests failure when every source fails, and that the failure is not cached.
///
/// Expected: Err on both attempts, each attempt reaching both sources
#[tokio::test]
async fn all_sources_failing_is_not_cached() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_status(TEST_SPECIES, 404, 2)
        .with_wolfram_no_result(TEST_SPECIES, 2)
        .build()
        .await?;
    let finder = test.species_finder(Arc::new(MemoryCache::new()));

    let first = finder.resolve(TEST_SPECIES).await;
    let second = finder.resolve(TEST_SPECIES).await;

    assert!(matches!(first, Err(SpeciesError::NotFound(_))));
    assert!(matches!(second, Err(SpeciesError::NotFound(_))));
    test.assert_mocks();

    Ok(())
}

/// Tests that repeated and equivalently spelled requests are served from cache.
///
/// Expected: each source is called exactly once across three requests
#[tokio::test]
async fn repeated_requests_reach_sources_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wikipedia_summary(TEST_SPECIES, 1)
        .with_wolfram_result(TEST_SPECIES, 1)
        .build()
        .await?;
    let finder = test.species_finder(Arc::new(MemoryCache::new()));

    let first = finder.resolve(TEST_SPECIES).await.unwrap();
    let second = finder.resolve(TEST_SPECIES).await.unwrap();
    let third = finder.resolve("canis-lupus").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, third);
    test.assert_mocks();

    Ok(())
}

/// Tests that a source coming back after a total failure is picked up on the next request.
///
/// Expected: Err while every source fails, then Ok with the recovered source's record
#[tokio::test]
async fn recovers_once_a_source_comes_back() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_wikipedia_status(TEST_SPECIES, 503, 2)
        .build()
        .await?;
    let finder = test.species_finder(Arc::new(MemoryCache::new()));

    // No Wolfram|Alpha endpoint yet, so the mock server rejects that lookup too
    let first = finder.resolve(TEST_SPECIES).await;
    assert!(matches!(first, Err(SpeciesError::NotFound(_))));

    let wolfram_mock = test
        .server()
        .mock("GET", wolfram::QUERY_PATH)
        .match_query(wolfram::query_matcher(TEST_SPECIES))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(wolfram::query_result(TEST_SPECIES).to_string())
        .expect(1)
        .create_async()
        .await;

    let second = finder.resolve(TEST_SPECIES).await.unwrap();

    assert_eq!(second.len(), 1);
    assert_eq!(second[0].source, "wolframalpha");
    wolfram_mock.assert();
    test.assert_mocks();

    Ok(())
}
