//! Business logic and service layer modules.
//!
//! The create pipeline runs leaves first: `weatherstack` fetches, then
//! `record_builder` merges, then `store` keeps the result. `weather` wires
//! the three together for the handlers.

pub mod metrics;
pub mod record_builder;
pub mod store;
pub mod weather;
pub mod weatherstack;

pub use metrics::*;
pub use record_builder::*;
pub use store::*;
pub use weather::*;
pub use weatherstack::*;
