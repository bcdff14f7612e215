//! # Commodex Core
//!
//! Commodity price boards built from the Alpha Vantage commodity series.
//!
//! ## Overview
//!
//! - **Domain models** for commodities, series points, and quotes
//! - **Normalizer** turning heterogeneous provider payloads into sorted series
//! - **Quote builder** deriving latest price and lookback changes
//! - **Quote board** fanning out one fetch per commodity
//! - **Dashboard client** reading the proxy with a placeholder fallback
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage commodity feed |
//! | [`board`] | Concurrent fan-out over all commodities |
//! | [`client`] | Proxy consumer with placeholder fallback |
//! | [`config`] | Explicit provider configuration |
//! | [`data_source`] | Series source trait and errors |
//! | [`domain`] | Commodity, point, quote, and timestamp types |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`normalize`] | Provider payload normalization |
//! | [`quote_builder`] | Quote and percentage change computation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use commodex_core::{ProviderConfig, QuoteBoard, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ProviderConfig::new(std::env::var("ALPHA_VANTAGE_API_KEY").ok());
//!     let board = QuoteBoard::from_config(&config, Arc::new(ReqwestHttpClient::new()));
//!
//!     for quote in board.snapshot().await.data {
//!         println!("{}: {:?}", quote.display_name, quote.current_price);
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Per-commodity failures never escape the board: a failed fetch, a quota
//! notice, or an unrecognized payload yields a quote with absent prices. A
//! missing credential yields an empty board carrying an `error` message.

pub mod adapters;
pub mod board;
pub mod client;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod normalize;
pub mod quote_builder;

pub use adapters::AlphaVantageFeed;
pub use board::{BoardSnapshot, QuoteBoard, MISSING_CREDENTIAL};
pub use client::{placeholder_snapshot, DashboardClient, DashboardFeed};
pub use config::{ProviderConfig, DEFAULT_BASE_URL};
pub use data_source::{SeriesSource, SourceError, SourceErrorKind};
pub use domain::{Commodity, ProviderQuery, Quote, Sector, TimeSeriesPoint, UtcDateTime};
pub use error::ValidationError;
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use normalize::{normalize, PayloadShape, RecordDecision, SeriesOutcome, SkipReason};
pub use quote_builder::{build_quote, Horizons};
