//! Houses handlers
//!
//! The single data endpoint plus the JSON 404 fallback.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::House;
use crate::domain::ports::HouseSource;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing houses
#[derive(Debug, Deserialize)]
pub struct ListHousesQuery {
    /// Optional case-insensitive substring to match against house names
    pub name: Option<String>,
}

/// GET /houses
///
/// Proxy the upstream house collection, optionally filtered by name.
pub async fn list_houses<S: HouseSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListHousesQuery>,
) -> Result<Json<Vec<House>>, AppError> {
    let houses = state.house_service.search(query.name.as_deref()).await?;
    Ok(Json(houses))
}

/// Fallback for every unmatched path
pub async fn not_found() -> AppError {
    AppError::NotFound
}
