//! House source port trait
//!
//! Defines the interface for fetching the house collection from wherever it
//! lives. The production implementation talks to the remote feed; tests use
//! an in-memory source.

use async_trait::async_trait;

use crate::domain::entities::House;
use crate::error::UpstreamError;

/// Provider of the full house collection
#[async_trait]
pub trait HouseSource: Send + Sync + 'static {
    /// Fetch every house from the source, in source order
    async fn fetch_houses(&self) -> Result<Vec<House>, UpstreamError>;
}
