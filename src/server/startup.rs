//! Startup wiring: HTTP client, cache store, providers and the species finder.

use std::{sync::Arc, time::Duration};

use crate::server::{
    cache::{MemoryCache, RedisCache, SpeciesCache},
    config::{CacheBackend, Config},
    error::{config::ConfigError, Error},
    provider::{MetadataProvider, WikipediaProvider, WolframAlphaProvider},
    service::species_finder::SpeciesFinder,
};

/// Connect timeout for outbound provider requests, independent of the per-provider deadline
const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the HTTP client shared by all metadata providers
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Connect to Valkey/Redis for the shared metadata cache
pub async fn connect_to_cache_store(valkey_url: &str) -> Result<fred::prelude::Pool, Error> {
    use fred::prelude::{ClientLike, Pool};

    let redis_config = fred::prelude::Config::from_url(valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}

/// Build the cache backend selected by the configuration
pub async fn build_cache(config: &Config) -> Result<Arc<dyn SpeciesCache>, Error> {
    match config.cache_backend {
        CacheBackend::Memory => {
            tracing::info!("Using in-memory species cache");

            Ok(Arc::new(MemoryCache::new()))
        }
        CacheBackend::Redis => {
            let valkey_url = config
                .valkey_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("VALKEY_URL".to_string()))?;

            let pool = connect_to_cache_store(valkey_url).await?;

            tracing::info!(ttl = ?config.cache_ttl, "Using Redis species cache");

            Ok(Arc::new(RedisCache::new(pool).with_ttl(config.cache_ttl)))
        }
    }
}

/// Build the metadata providers enabled by the configuration, in registration order
pub fn build_providers(
    config: &Config,
    client: &reqwest::Client,
) -> Vec<Arc<dyn MetadataProvider>> {
    let mut providers: Vec<Arc<dyn MetadataProvider>> =
        vec![Arc::new(WikipediaProvider::new(client.clone()))];

    match &config.wolfram_app_id {
        Some(app_id) => providers.push(Arc::new(WolframAlphaProvider::new(
            client.clone(),
            app_id.clone(),
        ))),
        None => tracing::warn!("WOLFRAM_APP_ID is not set, Wolfram|Alpha provider disabled"),
    }

    providers
}

/// Wire the cache and providers into the species finder
pub async fn build_species_finder(config: &Config) -> Result<SpeciesFinder, Error> {
    let client = build_http_client(config)?;
    let cache = build_cache(config).await?;
    let providers = build_providers(config, &client);

    let mut species_finder = SpeciesFinder::new(cache, providers);
    if let Some(timeout) = config.provider_timeout {
        species_finder = species_finder.with_provider_timeout(timeout);
    }

    tracing::info!(
        providers = species_finder.provider_count(),
        provider_timeout = ?config.provider_timeout,
        "Species finder ready"
    );

    Ok(species_finder)
}
