//! API request and response models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Body of `POST /weather`
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CreateWeatherRequest {
    /// Caller-supplied date, stored verbatim (e.g. "2024-12-25")
    pub date: String,
    /// Free-text location passed to the weather provider (e.g. "Paris")
    pub location: String,
    /// Optional notes; stored as an empty string when omitted
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response of `POST /weather`
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CreateWeatherResponse {
    /// Identifier to pass to `GET /weather/{id}`
    pub id: String,
}

/// Body returned with every error status
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    /// HTTP reason phrase (e.g. "Not Found")
    pub error: String,
    /// Human-readable cause
    pub message: String,
}
