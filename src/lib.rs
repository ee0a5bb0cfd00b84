//! Weather Journal API - records current weather for a date and location
//!
//! A caller posts a date, a free-text location, and optional notes. The
//! service fetches current conditions for the location from weatherstack,
//! merges them with the caller's input into a [`WeatherRecord`], and stores
//! it in memory under a generated id that can be read back later.
//!
//! ## Architecture
//!
//! - `models/` - Request/response bodies and the stored record
//! - `services/` - Provider client, record builder, store, and the pipeline
//! - `handlers/` - HTTP handlers and the app factory
//! - `middleware/` - Request IDs, metrics, and CORS
//! - `config/` - Environment-based configuration
//! - `error` - The error taxonomy and its HTTP mapping
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::HttpServer;
//! use weather_journal_api::{AppConfig, AppState, create_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::from_env().map_err(std::io::Error::other)?;
//!     let state = AppState::from_config(&config).map_err(std::io::Error::other)?;
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind((config.server.host.as_str(), config.server.port))?
//!         .run()
//!         .await
//! }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use config::{AppConfig, ConfigError, CorsConfig, MetricsConfig, ServerConfig, WeatherstackConfig};
pub use error::WeatherError;
pub use handlers::{
    create_app, create_openapi_spec, create_weather, get_metrics, get_weather, health, version,
};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware, cors_policy};
pub use models::{
    CreateWeatherRequest, CreateWeatherResponse, ErrorResponse, HealthResponse, VersionResponse,
    WeatherRecord,
};
pub use services::{
    AppMetrics, SAMPLE_RECORD_ID, UPSTREAM_TIMEOUT, WeatherService, WeatherStore,
    WeatherstackClient, build_record,
};
pub use state::AppState;
pub use telemetry::{TelemetryConfig, init_tracing};
