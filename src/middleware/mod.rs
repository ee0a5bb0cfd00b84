//! Custom middleware implementations for the API.
//!
//! Request IDs, metrics collection, and the CORS policy for the trusted
//! browser origin.

pub mod cors;
pub mod metrics;
pub mod request_id;

pub use cors::*;
pub use metrics::*;
pub use request_id::*;
