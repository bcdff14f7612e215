//! Commodity board endpoint.
//!
//! # Endpoints
//!
//! - `GET /api/commodities` - full board, edge-cacheable for five minutes
//! - `OPTIONS /api/commodities` - empty 204 (CORS preflights are answered by the CORS layer)
//! - any other method - 405 JSON error

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Shared caches may serve the board for 300 s and keep serving a stale copy
/// for 60 s while revalidating.
pub const CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=60";

pub async fn get_commodities(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.board.snapshot().await;
    debug!(
        quotes = snapshot.data.len(),
        populated = snapshot.data.iter().filter(|quote| quote.has_data()).count(),
        "serving commodity board"
    );

    ([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(snapshot))
}

pub async fn options_commodities() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
