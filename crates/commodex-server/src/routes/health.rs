use axum::extract::State;
use axum::Json;
use commodex_core::Commodity;
use serde::Serialize;

use crate::state::AppState;

/// Liveness response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether a provider credential is configured.
    pub configured: bool,
    pub commodities: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        configured: state.board.is_configured(),
        commodities: Commodity::ALL.len(),
    })
}
