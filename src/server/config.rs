//! Environment-driven process configuration.

use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CACHE_TTL_DAYS: u64 = 14;
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Which [`SpeciesCache`](crate::server::cache::SpeciesCache) implementation to run with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    /// In-process map, lost on restart
    Memory,
    /// Shared Redis/Valkey instance with a fixed TTL per entry
    Redis,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" | "valkey" => Ok(Self::Redis),
            other => Err(format!("expected \"memory\" or \"redis\", got {:?}", other)),
        }
    }
}

/// Process configuration, read once from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// TCP port the HTTP server binds on all interfaces
    pub port: u16,
    /// Cache store selected by `CACHE_BACKEND`
    pub cache_backend: CacheBackend,
    /// Connection URL for the Redis/Valkey backend
    pub valkey_url: Option<String>,
    /// Lifetime of entries written to the Redis backend
    pub cache_ttl: Duration,
    /// Wolfram|Alpha app id; the provider is skipped without one
    pub wolfram_app_id: Option<String>,
    /// Per-provider deadline, `None` waits for providers indefinitely
    pub provider_timeout: Option<Duration>,
    /// `User-Agent` sent with every outbound request
    pub user_agent: String,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let cache_backend = vars.parse("CACHE_BACKEND")?.unwrap_or(CacheBackend::Memory);

        let valkey_url = vars.optional("VALKEY_URL");
        if cache_backend == CacheBackend::Redis && valkey_url.is_none() {
            return Err(ConfigError::MissingEnvVar("VALKEY_URL".to_string()));
        }

        let cache_ttl_days: u64 = vars.parse("CACHE_TTL_DAYS")?.unwrap_or(DEFAULT_CACHE_TTL_DAYS);
        if cache_ttl_days == 0 {
            return Err(ConfigError::invalid(
                "CACHE_TTL_DAYS",
                "0",
                "TTL must be at least 1 day",
            ));
        }
        let cache_ttl_secs = cache_ttl_days.checked_mul(SECS_PER_DAY).ok_or_else(|| {
            ConfigError::invalid(
                "CACHE_TTL_DAYS",
                cache_ttl_days.to_string(),
                "TTL is too large to represent in seconds",
            )
        })?;

        // 0 disables the deadline entirely
        let provider_timeout_secs: u64 = vars
            .parse("PROVIDER_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);
        let provider_timeout =
            (provider_timeout_secs > 0).then(|| Duration::from_secs(provider_timeout_secs));

        Ok(Self {
            port: vars.parse("PORT")?.unwrap_or(DEFAULT_PORT),
            cache_backend,
            valkey_url,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            wolfram_app_id: vars.optional("WOLFRAM_APP_ID"),
            provider_timeout,
            user_agent: vars.optional("USER_AGENT").unwrap_or_else(default_user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("species-finder/{}", env!("CARGO_PKG_VERSION"))
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Reads a variable, treating an empty value the same as an unset one
    fn optional(&self, var: &str) -> Option<String> {
        (self.0)(var).filter(|value| !value.trim().is_empty())
    }

    fn parse<T>(&self, var: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(var)
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .map_err(|e| ConfigError::invalid(var, value.as_str(), e))
            })
            .transpose()
    }
}
