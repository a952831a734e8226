//! Page view-model
//!
//! State management for the houses page: a loading flag that gates rendering,
//! one list-level search string, and one card per house.
//!
//! Each card owns its own trait-search string. Hoisting that state to the
//! page would make typing in one card's search box filter every card at once,
//! so it lives here as one independent cell per house, keyed by house id.

use crate::client::{House, Trait};

/// One rendered house with its own trait-search state
pub struct HouseCard {
    house: House,
    trait_search: String,
}

impl HouseCard {
    fn new(house: House) -> Self {
        Self {
            house,
            trait_search: String::new(),
        }
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn id(&self) -> &str {
        &self.house.id
    }

    pub fn trait_search(&self) -> &str {
        &self.trait_search
    }

    /// Update this card's trait search, as if typing into its search box
    pub fn set_trait_search(&mut self, needle: impl Into<String>) {
        self.trait_search = needle.into();
    }

    /// This card's traits whose names contain the card's search string
    /// (case-insensitive), in upstream order
    pub fn visible_traits(&self) -> Vec<&Trait> {
        let needle = self.trait_search.to_lowercase();
        self.house
            .traits
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Top-level page state: the fetched list, the list-level search and the
/// loading flag
pub struct HousesPage {
    cards: Vec<HouseCard>,
    house_search: String,
    loading: bool,
}

impl Default for HousesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HousesPage {
    /// A page that has not finished its initial fetch yet
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            house_search: String::new(),
            loading: true,
        }
    }

    /// While true, a placeholder is rendered instead of the list
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Hand the fetched collection to the page, building one card per house
    pub fn finish_loading(&mut self, houses: Vec<House>) {
        self.cards = houses.into_iter().map(HouseCard::new).collect();
        self.loading = false;
    }

    pub fn house_search(&self) -> &str {
        &self.house_search
    }

    /// Update the list-level search, as if typing into the page search box
    pub fn set_house_search(&mut self, needle: impl Into<String>) {
        self.house_search = needle.into();
    }

    /// Cards whose house name contains the list-level search string
    /// (case-insensitive), in upstream order
    pub fn visible_cards(&self) -> Vec<&HouseCard> {
        self.cards
            .iter()
            .filter(|card| card.house.name_matches(&self.house_search))
            .collect()
    }

    /// Look up a card by house id, e.g. to type into its trait search box
    pub fn card_mut(&mut self, house_id: &str) -> Option<&mut HouseCard> {
        self.cards.iter_mut().find(|card| card.id() == house_id)
    }
}
