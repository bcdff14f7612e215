//! Fan-out driver producing the full commodity board.
//!
//! One fetch per commodity runs concurrently; each result flows through
//! [`crate::normalize::decode`] and [`crate::quote_builder::build_quote`]
//! independently. A failed fetch only empties its own quote. The returned
//! list always follows [`Commodity::ALL`] order.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::adapters::AlphaVantageFeed;
use crate::config::ProviderConfig;
use crate::data_source::SeriesSource;
use crate::http_client::HttpClient;
use crate::normalize::{decode, SeriesOutcome};
use crate::quote_builder::{build_quote, Horizons};
use crate::{Commodity, Quote, UtcDateTime};

/// Diagnostic returned when no provider credential is configured.
pub const MISSING_CREDENTIAL: &str = "market data API key is not configured";

/// Result of one board refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub data: Vec<Quote>,
    pub generated_at: UtcDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BoardSnapshot {
    pub fn missing_credential() -> Self {
        Self {
            data: Vec::new(),
            generated_at: UtcDateTime::now(),
            error: Some(String::from(MISSING_CREDENTIAL)),
        }
    }

    pub fn quote(&self, commodity: Commodity) -> Option<&Quote> {
        self.data.iter().find(|quote| quote.symbol_id == commodity)
    }
}

/// Builds quotes for every commodity from a series source.
#[derive(Clone)]
pub struct QuoteBoard {
    source: Option<Arc<dyn SeriesSource>>,
    horizons: Horizons,
}

impl QuoteBoard {
    /// Board backed by the Alpha Vantage feed. Without a credential the board
    /// never reaches the network.
    pub fn from_config(config: &ProviderConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let source = config.api_key().map(|api_key| {
            Arc::new(AlphaVantageFeed::new(
                http_client,
                config.base_url.clone(),
                api_key,
                config.timeout_ms,
            )) as Arc<dyn SeriesSource>
        });

        Self {
            source,
            horizons: config.horizons,
        }
    }

    pub fn with_source(source: Arc<dyn SeriesSource>, horizons: Horizons) -> Self {
        Self {
            source: Some(source),
            horizons,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    pub async fn snapshot(&self) -> BoardSnapshot {
        let Some(source) = self.source.as_deref() else {
            warn!("skipping board refresh: {MISSING_CREDENTIAL}");
            return BoardSnapshot::missing_credential();
        };

        let data = join_all(
            Commodity::ALL
                .iter()
                .map(|commodity| self.quote_for(source, *commodity)),
        )
        .await;

        BoardSnapshot {
            data,
            generated_at: UtcDateTime::now(),
            error: None,
        }
    }

    async fn quote_for(&self, source: &dyn SeriesSource, commodity: Commodity) -> Quote {
        let outcome = match source.fetch_series(commodity).await {
            Ok(payload) => decode(&payload),
            Err(error) => {
                warn!(%commodity, code = error.code(), "series fetch failed: {}", error.message());
                SeriesOutcome::NoData
            }
        };

        match &outcome {
            SeriesOutcome::Points {
                points, skipped, ..
            } => debug!(%commodity, points = points.len(), skipped, "series normalized"),
            SeriesOutcome::RateLimited { notice } => {
                info!(%commodity, notice = %notice, "provider rate limit notice")
            }
            SeriesOutcome::NoData => debug!(%commodity, "no series data"),
        }

        build_quote(commodity, outcome.points(), self.horizons)
    }
}
