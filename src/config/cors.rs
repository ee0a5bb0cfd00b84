//! Cross-origin configuration.

use super::ConfigError;
use std::env;
use url::Url;

pub const DEFAULT_TRUSTED_ORIGIN: &str = "http://localhost:3000";

/// The single browser origin allowed to call the API cross-origin
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub trusted_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            trusted_origin: DEFAULT_TRUSTED_ORIGIN.to_string(),
        }
    }
}

impl CorsConfig {
    /// Build a config for `origin`, normalising it to `scheme://host[:port]`.
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            trusted_origin: normalize_origin(origin)?,
        })
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("CORS_TRUSTED_ORIGIN") {
            Ok(origin) => Self::new(&origin),
            Err(_) => Ok(Self::default()),
        }
    }
}

fn normalize_origin(origin: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "CORS_TRUSTED_ORIGIN",
        reason,
    };

    let url = Url::parse(origin.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("origin has no host".to_string()));
    }

    Ok(url.origin().ascii_serialization())
}
