//! Port traits
//!
//! Interfaces the application layer depends on, implemented by adapters.

mod houses;

pub use houses::HouseSource;
