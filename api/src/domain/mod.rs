//! Domain layer
//!
//! Pure types and port traits. No HTTP or transport concerns here.

pub mod entities;
pub mod ports;
