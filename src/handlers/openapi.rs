//! OpenAPI specification generation and app factory.

use crate::{
    error::json_error_handler,
    handlers::{create_weather, get_metrics, get_weather, health, version},
    middleware::{MetricsMiddleware, RequestIdMiddleware, cors_policy},
    state::AppState,
};
use actix_web::{App, body::MessageBody};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Journal API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Records current weather conditions for a date and location.\n\n\
                ## Workflow\n\
                1. `POST /weather` with `{\"date\", \"location\", \"notes\"}`. The API fetches current \
                conditions for the location from the weather provider and stores them with your input.\n\
                2. Keep the returned `id`.\n\
                3. `GET /weather/{id}` returns the full stored record.\n\
                \n\
                ## Errors\n\
                Every error carries `{\"error\": \"<reason>\", \"message\": \"<cause>\"}`.\n\
                - `400`: malformed body, or the provider rejected the location\n\
                - `404`: unknown record id\n\
                - `500`: provider unavailable or unreachable\n\
                \n\
                Records are kept in memory and are lost when the service restarts."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with every route and middleware
///
/// `state` must be built once and cloned into each worker so all workers share
/// one record store.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap(cors_policy(&state.cors))
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(actix_web::web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(state.weather.clone())
        .app_data(state.metrics.clone())
        .app_data(state.metrics_config.clone())
        .service(web::resource("/weather").route(web::post().to(create_weather)))
        .service(web::resource("/weather/{id}").route(web::get().to(get_weather)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
