//! Test utilities
//!
//! In-memory mock of the house source port plus shared fixtures.

mod fixtures;
mod mocks;

pub use fixtures::{test_house, test_houses};
pub use mocks::MockHouseSource;
