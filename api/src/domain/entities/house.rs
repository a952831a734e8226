//! House domain entity
//!
//! Mirrors the upstream wire shape: a house has a founder, an animal, a
//! colour pair and an ordered list of traits. Instances are immutable once
//! fetched and live for a single request.

use serde::{Deserialize, Serialize};

/// Separator between the two colour names in `house_colours`
const COLOUR_SEPARATOR: &str = " and ";

/// A named attribute belonging to a house
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub id: String,
    pub name: String,
}

/// A wizarding house as served by the upstream feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub id: String,
    pub name: String,
    /// Two colour names joined by " and ", e.g. "Scarlet and Gold"
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
        self.house_colours
            .split(COLOUR_SEPARATOR)
            .map(str::trim)
            .collect()
    }
}
