//! Shared application state handed to every worker.

use crate::{
    config::{AppConfig, CorsConfig, MetricsConfig},
    error::WeatherError,
    services::{AppMetrics, WeatherService, WeatherStore, WeatherstackClient},
};
use actix_web::web;

/// Everything the app factory needs, built once in `main`
///
/// Cloning is cheap: the service and metrics sit behind `web::Data` (an
/// `Arc`), so every worker sees the same store.
#[derive(Clone)]
pub struct AppState {
    pub weather: web::Data<WeatherService>,
    pub metrics: web::Data<AppMetrics>,
    pub metrics_config: web::Data<MetricsConfig>,
    pub cors: CorsConfig,
}

impl AppState {
    pub fn new(
        weather: WeatherService,
        metrics: AppMetrics,
        metrics_config: MetricsConfig,
        cors: CorsConfig,
    ) -> Self {
        Self {
            weather: web::Data::new(weather),
            metrics: web::Data::new(metrics),
            metrics_config: web::Data::new(metrics_config),
            cors,
        }
    }

    /// Build the provider client, an empty store, and metrics from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, WeatherError> {
        let metrics = AppMetrics::new()
            .map_err(|e| WeatherError::Internal(format!("Failed to create metrics: {e}")))?;
        let client = WeatherstackClient::new(&config.weatherstack)?;

        let weather = WeatherService::new(client, WeatherStore::new())
            .with_raw_response(config.retain_raw_response)
            .with_metrics(metrics.clone());

        Ok(Self::new(
            weather,
            metrics,
            config.metrics.clone(),
            config.cors.clone(),
        ))
    }
}
