//! HTTP client for the houses API
//!
//! The page fetches the collection exactly once; all searching afterwards is
//! local to the view-model.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A named attribute belonging to a house
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub id: String,
    pub name: String,
}

/// A house as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub id: String,
    pub name: String,
    /// Two colour names joined by " and "
    #[serde(rename = "houseColours")]
    pub house_colours: String,
    pub founder: String,
    pub animal: String,
    pub traits: Vec<Trait>,
}

impl House {
    /// Case-insensitive substring match against the house name
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// The individual colour names, split out of the joined pair
    pub fn colour_pair(&self) -> Vec<&str> {
        self.house_colours.split(" and ").map(str::trim).collect()
    }
}

/// HTTP client for communicating with the houses API
#[derive(Clone)]
pub struct HousesClient {
    client: reqwest::Client,
    base_url: String,
}

impl HousesClient {
    /// Create a new client from environment variables
    ///
    /// Optional env var:
    /// - HOUSES_API_URL: Base URL of the API (default http://localhost:3001)
    pub fn from_env() -> Self {
        let base_url = std::env::var("HOUSES_API_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());
        Self::new(&base_url)
    }

    /// Create a new client with an explicit base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full house collection
    pub async fn fetch_houses(&self) -> Result<Vec<House>> {
        let url = format!("{}/houses", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .context("houses API returned an error status")?;

        response
            .json()
            .await
            .context("Failed to parse houses response")
    }
}
