//! Houses terminal front-end
//!
//! Fetches the house list from the API once, then renders it with the same
//! view state the web page would hold: a list-level search plus one
//! independent trait search per card.
//!
//! Usage: houses-web [search]

mod client;
mod render;
mod view;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use client::HousesClient;
use view::HousesPage;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so stdout stays clean for the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = HousesClient::from_env();
    let mut page = HousesPage::new();

    tracing::info!("Fetching houses");
    let houses = client.fetch_houses().await?;
    page.finish_loading(houses);

    if let Some(needle) = std::env::args().nth(1) {
        page.set_house_search(needle);
    }

    print!("{}", render::render_page(&page));

    Ok(())
}
