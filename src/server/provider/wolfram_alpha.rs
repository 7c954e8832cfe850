//! Wolfram|Alpha full results API provider.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::species::SpeciesMetadata,
    server::{
        error::provider::ProviderError,
        provider::{read_body, MetadataProvider},
    },
};

const PROVIDER_NAME: &str = "wolframalpha";
const DEFAULT_BASE_URL: &str = "https://api.wolframalpha.com";
const PUBLIC_QUERY_URL: &str = "https://www.wolframalpha.com/input";

/// Pod scanner identifying the species' common name
const IDENTITY_SCANNER: &str = "Identity";
/// Pod titles whose text makes up the summary, in response order
const SUMMARY_POD_TITLES: [&str; 2] = ["Taxonomy", "Biological properties"];

#[derive(Debug, Deserialize)]
struct QueryResponse {
    queryresult: QueryResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryResult {
    success: Option<bool>,
    /// `false` when the query went through, an object with `code`/`msg` otherwise
    error: Value,
    pods: Vec<Pod>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Pod {
    title: String,
    scanner: String,
    subpods: Vec<SubPod>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubPod {
    plaintext: String,
}

impl QueryResult {
    /// Error message reported by the API, if any
    fn error_message(&self) -> Option<String> {
        match &self.error {
            Value::Null | Value::Bool(false) => None,
            Value::Object(error) => Some(
                error
                    .get("msg")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            ),
            other => Some(other.to_string()),
        }
    }

    fn name(&self) -> Option<&str> {
        self.pods
            .iter()
            .filter(|pod| pod.scanner == IDENTITY_SCANNER)
            .find_map(|pod| pod.subpods.first())
            .map(|subpod| subpod.plaintext.as_str())
    }

    fn summary(&self) -> String {
        self.pods
            .iter()
            .filter(|pod| SUMMARY_POD_TITLES.contains(&pod.title.as_str()))
            .filter_map(|pod| pod.subpods.first())
            .map(|subpod| format!("{}\n", subpod.plaintext))
            .collect()
    }
}

/// Looks species up through the Wolfram|Alpha full results API
pub struct WolframAlphaProvider {
    client: Client,
    app_id: String,
    base_url: String,
}

impl WolframAlphaProvider {
    /// Creates a provider against the public Wolfram|Alpha API using `app_id`
    pub fn new(client: Client, app_id: impl Into<String>) -> Self {
        Self {
            client,
            app_id: app_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different API root (useful for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn query_url(&self, name: &str) -> Result<Url, ProviderError> {
        let invalid_url = |reason: String| ProviderError::InvalidUrl {
            provider: PROVIDER_NAME,
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_url(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| invalid_url("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["v2", "query"]);

        url.query_pairs_mut()
            .append_pair("appid", &self.app_id)
            .append_pair("output", "json")
            .append_pair("input", name);

        Ok(url)
    }
}

/// Link to the public Wolfram|Alpha results page for `name`
fn public_link(name: &str) -> String {
    match Url::parse_with_params(PUBLIC_QUERY_URL, &[("i", name)]) {
        Ok(url) => url.to_string(),
        Err(_) => String::new(),
    }
}

#[async_trait]
impl MetadataProvider for WolframAlphaProvider {
    async fn fetch_metadata(&self, name: &str) -> Result<SpeciesMetadata, ProviderError> {
        let url = self.query_url(name)?;

        tracing::debug!(species = %name, "Calling Wolfram|Alpha");

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
        let QueryResponse { queryresult } =
            serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
                provider: PROVIDER_NAME,
                source,
            })?;

        if let Some(message) = queryresult.error_message() {
            return Err(ProviderError::Api {
                provider: PROVIDER_NAME,
                status: 200,
                message,
            });
        }

        if queryresult.success == Some(false) {
            return Err(ProviderError::NotFound {
                provider: PROVIDER_NAME,
                species: name.to_string(),
            });
        }

        let resolved_name = match queryresult.name() {
            Some(resolved_name) => resolved_name.to_string(),
            None => {
                tracing::warn!(species = %name, "Wolfram|Alpha response has no identity pod");
                String::new()
            }
        };

        tracing::debug!(species = %name, "Wolfram|Alpha call complete");

        Ok(SpeciesMetadata {
            species: name.to_string(),
            source: PROVIDER_NAME.to_string(),
            link: public_link(name),
            name: resolved_name,
            image_path: String::new(),
            summary: queryresult.summary(),
        })
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
