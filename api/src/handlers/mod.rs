//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

mod houses;

pub use houses::{list_houses, not_found};
