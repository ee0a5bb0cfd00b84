//! Utility functions shared by middleware and handlers.

pub mod route;

pub use route::*;
