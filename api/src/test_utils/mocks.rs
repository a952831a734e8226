//! Mock implementations of port traits
//!
//! In-memory house source that can be configured to fail, so tests can drive
//! both the happy path and the upstream-failure path without a network.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::House;
use crate::domain::ports::HouseSource;
use crate::error::UpstreamError;

/// In-memory [`HouseSource`] for tests
#[derive(Default)]
pub struct MockHouseSource {
    houses: Arc<RwLock<Vec<House>>>,
    failing: Arc<RwLock<bool>>,
}

impl MockHouseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with houses for testing
    pub fn with_houses(self, houses: Vec<House>) -> Self {
        *self.houses.write().unwrap() = houses;
        self
    }

    /// Make subsequent fetches fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write().unwrap() = failing;
    }
}

#[async_trait]
impl HouseSource for MockHouseSource {
    async fn fetch_houses(&self) -> Result<Vec<House>, UpstreamError> {
        if *self.failing.read().unwrap() {
            return Err(UpstreamError::Status(503));
        }
        Ok(self.houses.read().unwrap().clone())
    }
}
