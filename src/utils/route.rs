//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Label used for requests that matched no registered route
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// The registered pattern for the request, e.g. `/weather/{id}`.
///
/// Using the pattern rather than the raw path keeps metric label cardinality
/// bounded. Requests that matched nothing share a single label.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    #[actix_web::test]
    async fn test_pattern_replaces_path_parameters() {
        let app = actix_test::init_service(App::new().route(
            "/weather/{id}",
            web::get().to(|req: HttpRequest| async move {
                HttpResponse::Ok().body(extract_route_pattern(&req))
            }),
        ))
        .await;

        let req = actix_test::TestRequest::get().uri("/weather/abc-123").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "/weather/{id}");
    }

    #[test]
    fn test_unmatched_request() {
        let req = actix_test::TestRequest::get().uri("/nowhere").to_http_request();
        assert_eq!(extract_route_pattern(&req), UNMATCHED_ROUTE);
    }
}
