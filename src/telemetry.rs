//! Structured logging setup.

use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers
    Json,
    /// Human-readable output for local development
    Pretty,
}

/// Logging configuration
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives, e.g. `info,weather_journal_api=debug`
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "info".to_string(),
        }
    }
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT").map(|v| v.to_lowercase()).as_deref() {
            Ok("pretty") | Ok("text") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self { format, filter }
    }
}

/// Install the global tracing subscriber.
///
/// Fails if the filter directives do not parse or a subscriber is already set.
pub fn init_tracing(
    config: &TelemetryConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
    }

    info!(format = ?config.format, filter = %config.filter, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::ENV_MUTEX;

    #[test]
    fn test_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("LOG_FORMAT", "Pretty");
            env::set_var("RUST_LOG", "debug");
        }

        let config = TelemetryConfig::from_env();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter, "debug");

        unsafe {
            env::remove_var("LOG_FORMAT");
            env::remove_var("RUST_LOG");
        }

        let config = TelemetryConfig::from_env();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "info");
    }
}
