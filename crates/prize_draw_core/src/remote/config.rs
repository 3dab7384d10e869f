use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

const REST_PREFIX: &str = "rest/v1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("service API key must not be empty")]
    MissingApiKey,
}

/// Connection settings for [`super::RestPrizeService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    rest_base: Url,
    api_key: String,
    request_timeout: Option<Duration>,
}

impl RemoteConfig {
    /// `base_url` is the project URL (e.g. `https://xyz.example.co`); the REST
    /// prefix is appended here.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(&format!("{trimmed}/{REST_PREFIX}/"))
            .map_err(|error| invalid(error.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            rest_base: parsed,
            api_key: api_key.to_string(),
            request_timeout: None,
        })
    }

    /// Requests wait indefinitely unless a timeout is set.
    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Resolves a path such as `prizes` or `rpc/draw_prize` below the REST prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.rest_base
            .join(path.trim_start_matches('/'))
            .map_err(|error| ConfigError::InvalidUrl {
                url: format!("{}{}", self.rest_base, path),
                reason: error.to_string(),
            })
    }
}
