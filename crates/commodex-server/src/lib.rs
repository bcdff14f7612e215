//! # Commodex Server
//!
//! HTTP proxy exposing the commodity board to browser dashboards. The
//! provider credential stays on the server; clients only see quotes.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`app`] | Router, CORS, and request tracing |
//! | [`config`] | Command-line and environment options |
//! | [`error`] | JSON error responses |
//! | [`routes`] | Endpoint handlers |
//! | [`state`] | Shared handler state |

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::{ServerArgs, DEFAULT_LOG_FILTER};
pub use error::ApiError;
pub use state::AppState;
