//! Maps a provider response plus the caller's request into a [`WeatherRecord`].
//!
//! All default substitution happens here. A missing, null, or mistyped field
//! in the provider's `current` object never fails the build; it falls back to
//! the documented default instead.

use crate::models::{CreateWeatherRequest, WeatherRecord};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

pub const DEFAULT_DESCRIPTION: &str = "Unknown";
pub const DEFAULT_WIND_DIRECTION: &str = "N";

/// Build a new record with a fresh identifier and `created_at` set to now.
///
/// `raw_api_response` is left empty; callers attach it when retention is on.
pub fn build_record(request: &CreateWeatherRequest, upstream: &Value) -> WeatherRecord {
    let current = upstream.get("current").unwrap_or(&Value::Null);

    let weather_description = current
        .get("weather_descriptions")
        .and_then(Value::as_array)
        .and_then(|descriptions| descriptions.first())
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    WeatherRecord {
        id: Uuid::new_v4().to_string(),
        date: request.date.clone(),
        location: format_location(&request.location, upstream.get("location")),
        notes: request.notes.clone().unwrap_or_default(),
        temperature: number(current, "temperature"),
        weather_description,
        humidity: integer(current, "humidity"),
        wind_speed: number(current, "wind_speed"),
        wind_direction: text(current, "wind_dir").unwrap_or(DEFAULT_WIND_DIRECTION).to_string(),
        pressure: number(current, "pressure"),
        visibility: number(current, "visibility"),
        uv_index: integer(current, "uv_index"),
        feels_like: number(current, "feelslike"),
        created_at: Utc::now(),
        raw_api_response: None,
    }
}

/// "{name}, {country}" from the provider's `location` object.
///
/// A missing or empty name falls back to what the caller typed. Leading and
/// trailing separators are trimmed so a missing country leaves just the name.
fn format_location(requested: &str, location: Option<&Value>) -> String {
    let location = location.unwrap_or(&Value::Null);
    let name = text(location, "name")
        .filter(|name| !name.is_empty())
        .unwrap_or(requested);
    let country = text(location, "country").unwrap_or_default();

    format!("{name}, {country}")
        .trim_matches(|c: char| c == ',' || c == ' ')
        .to_string()
}

fn text<'a>(object: &'a Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn number(object: &Value, key: &str) -> f64 {
    object.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn integer(object: &Value, key: &str) -> i64 {
    match object.get(key) {
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|v| v.round() as i64))
            .unwrap_or(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(location: &str, notes: Option<&str>) -> CreateWeatherRequest {
        CreateWeatherRequest {
            date: "2024-12-25".to_string(),
            location: location.to_string(),
            notes: notes.map(str::to_string),
        }
    }

    fn paris_body() -> Value {
        json!({
            "current": {
                "temperature": 10,
                "weather_descriptions": ["Clear"],
                "humidity": 60,
                "wind_speed": 5,
                "wind_dir": "W",
                "pressure": 1012,
                "visibility": 10,
                "uv_index": 3,
                "feelslike": 9
            },
            "location": {"name": "Paris", "country": "France"}
        })
    }

    #[test]
    fn test_full_response_mapping() {
        let record = build_record(&request("Paris", Some("trip")), &paris_body());

        assert_eq!(record.date, "2024-12-25");
        assert_eq!(record.location, "Paris, France");
        assert_eq!(record.notes, "trip");
        assert_eq!(record.temperature, 10.0);
        assert_eq!(record.weather_description, "Clear");
        assert_eq!(record.humidity, 60);
        assert_eq!(record.wind_speed, 5.0);
        assert_eq!(record.wind_direction, "W");
        assert_eq!(record.pressure, 1012.0);
        assert_eq!(record.visibility, 10.0);
        assert_eq!(record.uv_index, 3);
        assert_eq!(record.feels_like, 9.0);
        assert!(record.raw_api_response.is_none());
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_missing_current_uses_defaults() {
        let record = build_record(&request("Atlantis", None), &json!({}));

        assert_eq!(record.location, "Atlantis");
        assert_eq!(record.notes, "");
        assert_eq!(record.temperature, 0.0);
        assert_eq!(record.weather_description, DEFAULT_DESCRIPTION);
        assert_eq!(record.humidity, 0);
        assert_eq!(record.wind_direction, DEFAULT_WIND_DIRECTION);
        assert_eq!(record.uv_index, 0);
        assert_eq!(record.feels_like, 0.0);
    }

    #[test]
    fn test_null_and_mistyped_fields_use_defaults() {
        let body = json!({
            "current": {
                "temperature": null,
                "weather_descriptions": [],
                "humidity": "high",
                "wind_dir": null,
                "uv_index": 4.6
            }
        });
        let record = build_record(&request("Oslo", Some("")), &body);

        assert_eq!(record.temperature, 0.0);
        assert_eq!(record.weather_description, DEFAULT_DESCRIPTION);
        assert_eq!(record.humidity, 0);
        assert_eq!(record.wind_direction, DEFAULT_WIND_DIRECTION);
        assert_eq!(record.uv_index, 5);
    }

    #[test]
    fn test_location_fallbacks() {
        let only_name = json!({"location": {"name": "Lyon"}});
        assert_eq!(build_record(&request("lyon fr", None), &only_name).location, "Lyon");

        let empty_country = json!({"location": {"name": "Lyon", "country": ""}});
        assert_eq!(build_record(&request("lyon fr", None), &empty_country).location, "Lyon");

        let only_country = json!({"location": {"country": "France"}});
        assert_eq!(
            build_record(&request("lyon", None), &only_country).location,
            "lyon, France"
        );

        let blank_request = json!({"location": {"country": "France"}});
        assert_eq!(build_record(&request("", None), &blank_request).location, "France");
    }

    #[test]
    fn test_identifiers_are_fresh() {
        let body = paris_body();
        let req = request("Paris", Some("trip"));

        let first = build_record(&req, &body);
        let second = build_record(&req, &body);

        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
    }
}
