//! Page renderer
//!
//! Renders the view-model to plain text for the terminal.

use crate::view::{HouseCard, HousesPage};

/// Render the whole page; a placeholder while the initial fetch is pending
pub fn render_page(page: &HousesPage) -> String {
    if page.is_loading() {
        return "Loading...\n".to_string();
    }

    let mut buf = String::new();
    buf.push_str("# Wizard Houses\n\n");

    let cards = page.visible_cards();
    if cards.is_empty() {
        buf.push_str("No houses match your search.\n");
        return buf;
    }

    for card in cards {
        buf.push_str(&render_card(card));
        buf.push('\n');
    }

    buf
}

fn render_card(card: &HouseCard) -> String {
    let house = card.house();
    let mut buf = format!("## {} ({})\n", house.name, house.animal);
    buf.push_str(&format!("Founder: {}\n", house.founder));
    buf.push_str(&format!("Colours: {}\n", house.colour_pair().join(", ")));

    let traits = card.visible_traits();
    if traits.is_empty() {
        buf.push_str("Traits: none match\n");
    } else {
        let names: Vec<&str> = traits.iter().map(|t| t.name.as_str()).collect();
        buf.push_str(&format!("Traits: {}\n", names.join(", ")));
    }

    buf
}
