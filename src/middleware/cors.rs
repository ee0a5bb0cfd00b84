//! CORS policy for the single trusted browser origin.

use crate::config::CorsConfig;
use actix_cors::Cors;

/// Preflight cache lifetime sent in `Access-Control-Max-Age`
pub const PREFLIGHT_MAX_AGE_SECONDS: usize = 3600;

/// Build the CORS middleware: one origin, any method, any header,
/// credentials allowed.
pub fn cors_policy(config: &CorsConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.trusted_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECONDS)
}
