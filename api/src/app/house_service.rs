//! House service
//!
//! Fetches the house collection through the [`HouseSource`] port and applies
//! the optional name filter. Each call fetches fresh data; nothing is cached
//! and no state is shared between requests.

use std::sync::Arc;

use crate::domain::entities::House;
use crate::domain::ports::HouseSource;
use crate::error::AppError;

/// Service for listing and filtering houses
pub struct HouseService<S>
where
    S: HouseSource,
{
    source: Arc<S>,
}

impl<S> HouseService<S>
where
    S: HouseSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch all houses, keeping only those whose name contains the needle
    /// (case-insensitive). `None` and the empty string both match everything.
    /// Upstream order is preserved.
    pub async fn search(&self, filter: Option<&str>) -> Result<Vec<House>, AppError> {
        let houses = self.source.fetch_houses().await?;

        let houses = match filter {
            Some(needle) => {
                let needle = needle.to_lowercase();
                houses
                    .into_iter()
                    .filter(|house| house.name.to_lowercase().contains(&needle))
                    .collect()
            }
            None => houses,
        };

        Ok(houses)
    }
}
