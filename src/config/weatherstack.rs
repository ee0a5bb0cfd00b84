//! Weather provider configuration.

use super::ConfigError;
use std::env;
use url::Url;

pub const DEFAULT_WEATHERSTACK_BASE_URL: &str = "http://api.weatherstack.com";

/// Credentials and endpoint for the weatherstack API
#[derive(Clone, Debug)]
pub struct WeatherstackConfig {
    pub access_key: String,
    /// Base URL; the client appends `/current`
    pub base_url: String,
}

impl WeatherstackConfig {
    pub fn new(access_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `WEATHERSTACK_API_KEY` is required; the base URL defaults to the public
    /// endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key = env::var("WEATHERSTACK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("WEATHERSTACK_API_KEY"))?;

        let base_url = env::var("WEATHERSTACK_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHERSTACK_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            key: "WEATHERSTACK_BASE_URL",
            reason: e.to_string(),
        })?;

        Ok(Self::new(access_key.trim(), base_url.trim_end_matches('/')))
    }
}
