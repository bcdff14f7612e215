//! Dashboard-side consumer of the commodex proxy endpoint.
//!
//! [`DashboardClient::load`] never fails: when the proxy is unreachable,
//! answers with a non-success status, returns an undecodable body, or reports
//! an empty board, it synthesizes placeholder quotes locally.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::board::BoardSnapshot;
use crate::data_source::SourceError;
use crate::http_client::{HttpClient, HttpRequest, DEFAULT_TIMEOUT_MS};
use crate::{Commodity, Quote, UtcDateTime};

/// What the dashboard should render.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardFeed {
    Live(BoardSnapshot),
    Placeholder {
        snapshot: BoardSnapshot,
        reason: String,
    },
}

impl DashboardFeed {
    pub fn snapshot(&self) -> &BoardSnapshot {
        match self {
            Self::Live(snapshot) | Self::Placeholder { snapshot, .. } => snapshot,
        }
    }

    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Reads the board from a running proxy.
#[derive(Clone)]
pub struct DashboardClient {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl DashboardClient {
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn load(&self) -> DashboardFeed {
        match self.fetch().await {
            Ok(snapshot) if !snapshot.data.is_empty() => {
                debug!(quotes = snapshot.data.len(), "loaded live board");
                DashboardFeed::Live(snapshot)
            }
            Ok(snapshot) => {
                let reason = snapshot
                    .error
                    .unwrap_or_else(|| String::from("proxy returned an empty board"));
                warn!(%reason, "falling back to placeholder board");
                DashboardFeed::Placeholder {
                    snapshot: placeholder_snapshot(UtcDateTime::now()),
                    reason,
                }
            }
            Err(error) => {
                warn!(code = error.code(), "falling back to placeholder board: {}", error.message());
                DashboardFeed::Placeholder {
                    snapshot: placeholder_snapshot(UtcDateTime::now()),
                    reason: error.to_string(),
                }
            }
        }
    }

    async fn fetch(&self) -> Result<BoardSnapshot, SourceError> {
        let request = HttpRequest::get(&self.endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| SourceError::from_http(&error, "proxy unreachable"))?;

        if !response.is_success() {
            return Err(SourceError::status(response.status));
        }

        serde_json::from_str(&response.body)
            .map_err(|error| SourceError::decode(format!("failed to parse board: {error}")))
    }
}

/// Deterministic stand-in board covering every commodity.
pub fn placeholder_snapshot(generated_at: UtcDateTime) -> BoardSnapshot {
    BoardSnapshot {
        data: Commodity::ALL.iter().map(|c| placeholder_quote(*c)).collect(),
        generated_at,
        error: None,
    }
}

fn placeholder_quote(commodity: Commodity) -> Quote {
    let seed = commodity_seed(commodity);
    let base = reference_price(commodity);
    let drift = |salt: u64| ((seed.wrapping_add(salt) % 400) as f64 - 200.0) / 100.0;

    Quote {
        current_price: Some(base * (1.0 + drift(3) / 100.0)),
        change_1h_pct: Some(drift(5) / 4.0),
        change_4h_pct: Some(drift(7) / 2.0),
        change_24h_pct: Some(drift(11)),
        ..Quote::empty(commodity)
    }
}

/// Ballpark level in the provider's units (USD per barrel, MMBtu, troy ounce, metric ton).
fn reference_price(commodity: Commodity) -> f64 {
    match commodity {
        Commodity::Wti => 78.0,
        Commodity::Brent => 82.0,
        Commodity::Natgas => 2.6,
        Commodity::Gold => 2_030.0,
        Commodity::Silver => 23.5,
        Commodity::Copper => 8_500.0,
        Commodity::Wheat => 250.0,
    }
}

fn commodity_seed(commodity: Commodity) -> u64 {
    commodity.as_str().bytes().fold(11_u64, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(byte as u64)
    })
}
