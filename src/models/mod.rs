//! Data models for the weather journal API.
//!
//! `api` holds the request/response bodies documented in the OpenAPI spec;
//! `record` holds the stored weather record.

pub mod api;
pub mod record;

pub use api::*;
pub use record::*;
