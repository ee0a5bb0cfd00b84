//! Error taxonomy for the weather journal pipeline.
//!
//! Every failure in the create/read pipeline is a [`WeatherError`]. Handlers
//! propagate it with `?` and actix renders it through [`ResponseError`], so the
//! status code mapping lives in exactly one place.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message used when the provider reports an error without an `info` field.
pub const GENERIC_UPSTREAM_MESSAGE: &str = "Unknown error from weather provider";

/// Joins an error with every cause beneath it, outermost first.
///
/// reqwest's own message is only "error sending request"; the useful part
/// (refused connection, DNS failure, timeout) sits further down the chain.
fn cause_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Errors produced while creating or reading weather records.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The create request body was malformed or missing required fields.
    #[error("Invalid weather request: {0}")]
    Validation(String),

    /// The provider understood the query but rejected it (e.g. unknown location).
    #[error("Weather provider error: {0}")]
    UpstreamRejected(String),

    /// The provider answered with a non-success HTTP status.
    #[error("Failed to fetch weather data from weather provider (status {0})")]
    UpstreamUnavailable(u16),

    /// The provider could not be reached at all, or did not answer in time.
    #[error("Network error while fetching weather data: {}", cause_chain(.0))]
    Network(#[source] reqwest::Error),

    #[error("Weather data not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl WeatherError {
    /// Wraps a transport error, dropping the request URL so the provider
    /// access key never ends up in a log line or response body.
    pub fn network(err: reqwest::Error) -> Self {
        WeatherError::Network(err.without_url())
    }

    /// Short label used for upstream metrics.
    pub fn upstream_outcome(&self) -> &'static str {
        match self {
            WeatherError::UpstreamRejected(_) => "rejected",
            WeatherError::UpstreamUnavailable(_) => "unavailable",
            WeatherError::Network(_) => "network_error",
            WeatherError::Internal(_) => "invalid_response",
            WeatherError::Validation(_) | WeatherError::NotFound(_) => "error",
        }
    }
}

impl ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::Validation(_) | WeatherError::UpstreamRejected(_) => StatusCode::BAD_REQUEST,
            WeatherError::NotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::UpstreamUnavailable(_)
            | WeatherError::Network(_)
            | WeatherError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Weather request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Weather request rejected");
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        })
    }
}

/// Turns JSON extractor failures (bad syntax, missing fields, wrong content
/// type) into a validation error with the same body shape as other failures.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    WeatherError::Validation(err.to_string()).into()
}
