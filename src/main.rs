use actix_web::HttpServer;
use tracing::{error, info};
use weather_journal_api::{AppConfig, AppState, TelemetryConfig, create_app, init_tracing};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let telemetry = TelemetryConfig::from_env();
    if let Err(e) = init_tracing(&telemetry) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::other(e)
    })?;

    let state = AppState::from_config(&config).map_err(|e| {
        error!(error = %e, "Failed to initialize application state");
        std::io::Error::other(e)
    })?;

    if config.seed_sample_record {
        let sample_id = state.weather.seed_sample_record();
        info!(sample_id = %sample_id, "Seeded sample weather record");
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        trusted_origin = %config.cors.trusted_origin,
        retain_raw_response = config.retain_raw_response,
        "Weather journal API starting"
    );

    HttpServer::new(move || create_app(state.clone()))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await
}
