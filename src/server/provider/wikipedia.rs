//! Wikipedia page summary provider.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    model::species::SpeciesMetadata,
    server::{
        error::provider::ProviderError,
        provider::{read_body, MetadataProvider},
    },
};

const PROVIDER_NAME: &str = "wikipedia";
const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Page summary document from the Wikipedia REST API
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageSummary {
    title: String,
    extract: String,
    originalimage: Option<Image>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Image {
    source: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageUrls {
    page: String,
}

/// Looks species up by page title in the Wikipedia page summary API
pub struct WikipediaProvider {
    client: Client,
    base_url: String,
}

impl WikipediaProvider {
    /// Creates a provider against the public English Wikipedia REST API
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different API root (useful for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build `{base}/page/summary/{title}` where the title uses underscores for spaces
    fn summary_url(&self, name: &str) -> Result<Url, ProviderError> {
        let invalid_url = |reason: String| ProviderError::InvalidUrl {
            provider: PROVIDER_NAME,
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_url(e.to_string()))?;
        let title = name.trim().replace(' ', "_");

        url.path_segments_mut()
            .map_err(|_| invalid_url("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["page", "summary", title.as_str()]);

        Ok(url)
    }
}

#[async_trait]
impl MetadataProvider for WikipediaProvider {
    async fn fetch_metadata(&self, name: &str) -> Result<SpeciesMetadata, ProviderError> {
        let url = self.summary_url(name)?;

        tracing::debug!(species = %name, "Calling Wikipedia");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                provider: PROVIDER_NAME,
                source,
            })?;

        let body = read_body(PROVIDER_NAME, name, response).await?;
        let summary: PageSummary =
            serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
                provider: PROVIDER_NAME,
                source,
            })?;

        tracing::debug!(species = %name, "Wikipedia call complete");

        Ok(SpeciesMetadata {
            species: name.to_string(),
            source: PROVIDER_NAME.to_string(),
            link: summary
                .content_urls
                .and_then(|urls| urls.desktop)
                .map(|desktop| desktop.page)
                .unwrap_or_default(),
            name: summary.title,
            image_path: summary
                .originalimage
                .map(|image| image.source)
                .unwrap_or_default(),
            summary: summary.extract,
        })
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
