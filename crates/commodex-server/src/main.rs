//! Commodity board proxy binary.
//!
//! Run with:
//! ```bash
//! ALPHA_VANTAGE_API_KEY=... commodex-server --listen 127.0.0.1:8787
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use commodex_core::{QuoteBoard, ReqwestHttpClient};
use commodex_server::{create_app, AppState, ServerArgs, DEFAULT_LOG_FILTER};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ServerArgs::parse();
    let config = args.provider_config();
    config
        .validate()
        .context("invalid provider configuration")?;

    if !config.has_credential() {
        warn!("ALPHA_VANTAGE_API_KEY is not set; serving empty boards");
    }

    let board = QuoteBoard::from_config(&config, Arc::new(ReqwestHttpClient::new()));
    let app = create_app(AppState::new(board));

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;

    info!(listen = %args.listen, base_url = %config.base_url, timeout_ms = config.timeout_ms, "commodex server started");

    axum::serve(listener, app).await.context("server terminated")
}
