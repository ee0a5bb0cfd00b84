//! Weather provider client tests against a wiremock server.

use serde_json::json;
use std::time::Duration;
use weather_journal_api::{UPSTREAM_TIMEOUT, WeatherError, WeatherstackClient, WeatherstackConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(base_url: &str) -> WeatherstackClient {
    WeatherstackClient::new(&WeatherstackConfig::new("secret-key", base_url))
        .expect("Failed to create client")
}

#[tokio::test]
async fn test_success_returns_body_unchanged() {
    let server = MockServer::start().await;
    let body = json!({
        "location": {"name": "Paris", "country": "France"},
        "current": {"temperature": 10, "weather_descriptions": ["Clear"]},
        "extra": {"kept": true}
    });

    Mock::given(method("GET"))
        .and(path("/current"))
        .and(query_param("access_key", "secret-key"))
        .and(query_param("query", "Paris"))
        .and(query_param("units", "m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server.uri()).current("Paris").await.unwrap();
    assert_eq!(result, body);
}

#[tokio::test]
async fn test_location_is_passed_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .and(query_param("query", "São Paulo, BR & more"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"current": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server.uri()).current("São Paulo, BR & more").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"current": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    assert!(client(&base).current("Rome").await.is_ok());
}

#[tokio::test]
async fn test_error_object_is_rejected_with_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": {"code": 101, "type": "invalid_access_key", "info": "You have not supplied a valid API Access Key."}
        })))
        .mount(&server)
        .await;

    let err = client(&server.uri()).current("Paris").await.unwrap_err();
    match err {
        WeatherError::UpstreamRejected(message) => {
            assert_eq!(message, "You have not supplied a valid API Access Key.")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_object_without_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": {"code": 615}})))
        .mount(&server)
        .await;

    let err = client(&server.uri()).current("Paris").await.unwrap_err();
    assert!(
        matches!(err, WeatherError::UpstreamRejected(ref message) if message == "Unknown error from weather provider")
    );
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client(&server.uri()).current("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::UpstreamUnavailable(502)));
}

#[tokio::test]
async fn test_invalid_json_is_internal_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server.uri()).current("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::Internal(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let err = client("http://127.0.0.1:1").current("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::Network(_)));
    assert!(err.to_string().to_lowercase().contains("connect"));
    assert!(!err.to_string().contains("secret-key"));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"current": {"temperature": 1}}))
                .set_delay(UPSTREAM_TIMEOUT + Duration::from_secs(1)),
        )
        .mount(&server)
        .await;

    let err = client(&server.uri()).current("Paris").await.unwrap_err();

    match &err {
        WeatherError::Network(source) => assert!(source.is_timeout()),
        other => panic!("expected a network timeout, got {other:?}"),
    }
    assert_eq!(err.upstream_outcome(), "network_error");
    assert!(!err.to_string().contains("secret-key"));
}
