use serde::{Deserialize, Serialize};

use crate::{Commodity, UtcDateTime};

/// One (timestamp, price) observation for a commodity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: UtcDateTime,
    pub price: f64,
}

impl TimeSeriesPoint {
    pub const fn new(timestamp: UtcDateTime, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Request-time snapshot of the latest price and horizon-relative changes.
///
/// Absent values serialize as `null` so the wire shape is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol_id: Commodity,
    pub display_name: String,
    pub current_price: Option<f64>,
    #[serde(rename = "change1hPct")]
    pub change_1h_pct: Option<f64>,
    #[serde(rename = "change4hPct")]
    pub change_4h_pct: Option<f64>,
    #[serde(rename = "change24hPct")]
    pub change_24h_pct: Option<f64>,
}

impl Quote {
    /// Quote carrying only identity, used when a commodity has no data.
    pub fn empty(commodity: Commodity) -> Self {
        Self {
            symbol_id: commodity,
            display_name: commodity.display_name().to_owned(),
            current_price: None,
            change_1h_pct: None,
            change_4h_pct: None,
            change_24h_pct: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.current_price.is_some()
    }
}
