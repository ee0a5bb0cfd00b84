//! The stored weather record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller input merged with the provider's current conditions.
///
/// Records are immutable once stored. `created_at` is always server time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub id: String,
    pub date: String,
    /// "name, country" as reported by the provider
    pub location: String,
    pub notes: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub weather_description: String,
    /// Percent
    pub humidity: i64,
    pub wind_speed: f64,
    /// Compass abbreviation such as "NNW"
    pub wind_direction: String,
    pub pressure: f64,
    pub visibility: f64,
    pub uv_index: i64,
    pub feels_like: f64,
    pub created_at: DateTime<Utc>,
    /// Unmodified provider body, kept for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_api_response: Option<serde_json::Value>,
}
