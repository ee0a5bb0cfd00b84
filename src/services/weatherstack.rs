//! Client for the weatherstack "current conditions" endpoint.
//!
//! The client makes exactly one attempt per call and hands back the parsed
//! JSON body untouched. Turning that body into a record is the job of
//! [`crate::services::record_builder`].

use crate::{
    config::WeatherstackConfig,
    error::{GENERIC_UPSTREAM_MESSAGE, WeatherError},
};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Fixed per-request timeout for provider calls
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Unit-system flag sent to the provider; "m" is metric (Celsius, km/h)
pub const METRIC_UNITS: &str = "m";

/// Weather provider client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct WeatherstackClient {
    http: Client,
    current_url: String,
    access_key: String,
}

impl WeatherstackClient {
    pub fn new(config: &WeatherstackConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| WeatherError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            current_url: format!("{}/current", config.base_url.trim_end_matches('/')),
            access_key: config.access_key.clone(),
        })
    }

    /// Fetch current conditions for `location`.
    ///
    /// Returns the provider body unchanged on success. The provider reports
    /// query errors (unknown location, bad key) with a 200 status and an
    /// `error` object, which becomes [`WeatherError::UpstreamRejected`].
    pub async fn current(&self, location: &str) -> Result<Value, WeatherError> {
        let start = Instant::now();

        let response = self
            .http
            .get(&self.current_url)
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("query", location),
                ("units", METRIC_UNITS),
            ])
            .send()
            .await
            .map_err(WeatherError::network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                location = %location,
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Weather provider returned non-success status"
            );
            return Err(WeatherError::UpstreamUnavailable(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(WeatherError::network)?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            WeatherError::Internal(format!("Failed to parse weather provider response: {e}"))
        })?;

        if let Some(error) = body.get("error") {
            let message = error
                .get("info")
                .and_then(Value::as_str)
                .filter(|info| !info.is_empty())
                .unwrap_or(GENERIC_UPSTREAM_MESSAGE);

            warn!(
                location = %location,
                code = ?error.get("code"),
                error_type = ?error.get("type").and_then(|t| t.as_str()),
                message = %message,
                "Weather provider rejected query"
            );
            return Err(WeatherError::UpstreamRejected(message.to_string()));
        }

        info!(
            location = %location,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Fetched current weather"
        );

        Ok(body)
    }
}
