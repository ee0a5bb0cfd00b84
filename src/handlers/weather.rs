//! Weather record endpoints.

use crate::{
    models::{CreateWeatherRequest, CreateWeatherResponse},
    services::WeatherService,
};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Create a weather record
///
/// Fetches current conditions for the requested location, stores them with
/// the caller's date and notes, and returns the new record's identifier.
#[api_v2_operation(
    summary = "Create Weather Record",
    description = "Fetches current weather for `location` from the weather provider, stores it together with `date` and `notes`, and returns the generated record id.",
    tags("Weather"),
    responses(
        (status = 200, description = "Record created", body = CreateWeatherResponse),
        (status = 400, description = "Bad Request - malformed body or location rejected by the weather provider", body = crate::models::ErrorResponse),
        (status = 500, description = "Internal Server Error - weather provider unavailable or unreachable", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_weather(
    service: web::Data<WeatherService>,
    payload: web::Json<CreateWeatherRequest>,
) -> Result<web::Json<CreateWeatherResponse>, Error> {
    let id = service.create(payload.into_inner()).await?;
    Ok(web::Json(CreateWeatherResponse { id }))
}

/// Read a weather record
///
/// Returns the full stored record, including the raw provider response when
/// retention is enabled.
#[api_v2_operation(
    summary = "Get Weather Record",
    description = "Returns the weather record stored under `id`.",
    tags("Weather"),
    responses(
        (status = 200, description = "Stored weather record"),
        (status = 404, description = "Not Found - no record with this id", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_weather(
    service: web::Data<WeatherService>,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();
    let record = service.get(&id)?;
    tracing::debug!(id = %id, "Returning weather record");
    Ok(HttpResponse::Ok().json(record.as_ref()))
}
