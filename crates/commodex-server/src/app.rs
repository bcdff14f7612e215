//! Axum application builder.
//!
//! # Routes
//!
//! - `GET /api/commodities` - commodity board
//! - `OPTIONS /api/commodities` - empty 204
//! - `GET /health` - liveness probe

use std::time::Duration;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{self, commodities, health};
use crate::state::AppState;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route(
            "/api/commodities",
            get(commodities::get_commodities)
                .options(commodities::options_commodities)
                .fallback(commodities::method_not_allowed),
        )
        .route("/health", get(health::health))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
