//! Metadata providers, one per external knowledge source.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           MetadataProvider trait             │
//! │  fetch_metadata(&str) -> SpeciesMetadata     │
//! └──────────────────────────────────────────────┘
//!            △                         △
//!            │                         │
//!  ┌─────────┴─────────┐   ┌───────────┴──────────┐
//!  │ WikipediaProvider │   │ WolframAlphaProvider │
//!  └───────────────────┘   └──────────────────────┘
//! ```
//!
//! New sources are added by implementing the trait and registering the
//! instance with [`SpeciesFinder`](crate::server::service::species_finder::SpeciesFinder)
//! at construction time.

pub mod wikipedia;
pub mod wolfram_alpha;

pub use wikipedia::WikipediaProvider;
pub use wolfram_alpha::WolframAlphaProvider;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{model::species::SpeciesMetadata, server::error::provider::ProviderError};

/// Fetches metadata for a species name from one external knowledge source.
///
/// Implementations perform a single outbound request per call and map the
/// source-specific response into [`SpeciesMetadata`]. Fields the source does
/// not provide are left empty rather than treated as an error.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch metadata for `name`, exactly as the user requested it
    async fn fetch_metadata(&self, name: &str) -> Result<SpeciesMetadata, ProviderError>;

    /// Provider identifier, also used as [`SpeciesMetadata::source`]
    fn name(&self) -> &'static str;
}

/// Read a provider response body, mapping non-success statuses to errors.
///
/// A 404 means the source has nothing for the species; any other non-2xx
/// status is reported with whatever body the source sent back.
pub(crate) async fn read_body(
    provider: &'static str,
    species: &str,
    response: reqwest::Response,
) -> Result<String, ProviderError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ProviderError::NotFound {
            provider,
            species: species.to_string(),
        });
    }

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            provider,
            status: status.as_u16(),
            message,
        });
    }

    response
        .text()
        .await
        .map_err(|source| ProviderError::Request { provider, source })
}
