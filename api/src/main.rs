//! Houses API Server
//!
//! A proxy in front of the remote Wizard World houses feed. Re-serves the
//! house collection at `GET /houses`, optionally filtered by a
//! case-insensitive `?name=` substring. Uses hexagonal (ports & adapters)
//! architecture so the upstream feed can be swapped out in tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::WizardWorldClient;
use app::HouseService;
use config::Config;
use domain::ports::HouseSource;

/// Application state shared across all handlers
pub struct AppState<S>
where
    S: HouseSource,
{
    pub house_service: Arc<HouseService<S>>,
}

// Manual impl: `Arc` is cloneable regardless of whether `S` is
impl<S: HouseSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            house_service: self.house_service.clone(),
        }
    }
}

/// Build the router over any house source
pub fn router<S: HouseSource>(state: AppState<S>) -> Router {
    Router::new()
        .route("/houses", get(handlers::list_houses::<S>))
        .fallback(handlers::not_found)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,houses_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting houses API...");

    // Load configuration
    let config = Config::from_env();

    // Wire the upstream adapter into the service
    let source = Arc::new(WizardWorldClient::new(config.upstream_url.clone()));
    let house_service = Arc::new(HouseService::new(source));

    let state = AppState { house_service };
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
