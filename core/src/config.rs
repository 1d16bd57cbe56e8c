//! Client configuration.
//!
//! A `ClientConfig` is the single transport/configuration object the API
//! client is built from. Defaults point at the public API; the environment
//! can override the base URL and request timeout.

use std::time::Duration;

use crate::error::ApiError;

/// Public endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "RICKMORTY_API_URL";

/// Environment variable overriding [`ClientConfig::timeout`], in whole seconds.
pub const TIMEOUT_ENV: &str = "RICKMORTY_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout. `None` keeps the transport's own default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("rickmorty/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `RICKMORTY_API_URL` and `RICKMORTY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout(&raw)?);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ApiError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ApiError::Config(format!(
            "{TIMEOUT_ENV} must be a positive number of seconds, got {raw:?}"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
