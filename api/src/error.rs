//! Unified error types for the houses API
//!
//! Two layers:
//! - `UpstreamError`: failures talking to the remote houses feed
//! - `AppError`: application errors mapped to HTTP responses
//!
//! The HTTP surface is deliberately coarse: any upstream failure (transport,
//! bad status, malformed payload) surfaces as the same 500 body, and every
//! unmatched route is the same 404 body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors from the upstream houses feed client
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("upstream failure: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("not found")]
    NotFound,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Upstream(e) => {
                tracing::error!("Upstream failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch remote data",
                )
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}
