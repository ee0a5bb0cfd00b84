//! Configuration structures and loading utilities.
//!
//! Each concern has its own module with a `from_env()` constructor that falls
//! back to defaults. [`AppConfig`] gathers them for `main`.

pub mod cors;
pub mod metrics;
pub mod server;
pub mod weatherstack;

pub use cors::*;
pub use metrics::*;
pub use server::*;
pub use weatherstack::*;

use std::{env, str::FromStr};
use thiserror::Error;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Complete service configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub weatherstack: WeatherstackConfig,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
    /// Attach the unmodified provider body to each stored record
    pub retain_raw_response: bool,
    /// Insert the sample record at startup
    pub seed_sample_record: bool,
}

impl AppConfig {
    /// Load every configuration section from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            weatherstack: WeatherstackConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            metrics: MetricsConfig::from_env(),
            retain_raw_response: env_flag("RETAIN_RAW_RESPONSE", true),
            seed_sample_record: env_flag("SEED_SAMPLE_RECORD", false),
        })
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or unparseable.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a boolean flag; only `true`/`false` (any case) are recognised.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().to_lowercase().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that touch process environment variables must hold this lock.
    pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_env_flag_parsing() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("WJ_TEST_FLAG", "TRUE");
        }
        assert!(env_flag("WJ_TEST_FLAG", false));

        unsafe {
            env::set_var("WJ_TEST_FLAG", "maybe");
        }
        assert!(!env_flag("WJ_TEST_FLAG", false));

        unsafe {
            env::remove_var("WJ_TEST_FLAG");
        }
        assert!(env_flag("WJ_TEST_FLAG", true));
    }

    #[test]
    fn test_app_config_requires_api_key() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("WEATHERSTACK_API_KEY");
        }

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("WEATHERSTACK_API_KEY")));
    }

    #[test]
    fn test_app_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("WEATHERSTACK_API_KEY", "abc123");
            env::set_var("PORT", "9090");
            env::set_var("SEED_SAMPLE_RECORD", "true");
            env::set_var("RETAIN_RAW_RESPONSE", "false");
            env::remove_var("CORS_TRUSTED_ORIGIN");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.weatherstack.access_key, "abc123");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.cors.trusted_origin, "http://localhost:3000");
        assert!(config.seed_sample_record);
        assert!(!config.retain_raw_response);

        unsafe {
            env::remove_var("WEATHERSTACK_API_KEY");
            env::remove_var("PORT");
            env::remove_var("SEED_SAMPLE_RECORD");
            env::remove_var("RETAIN_RAW_RESPONSE");
        }
    }
}
