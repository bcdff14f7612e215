//! Response normalization for provider commodity payloads.
//!
//! The provider answers with one of two JSON layouts, sometimes both:
//!
//! - **Flat list**: `{"data": [{"date": "2024-01-02", "value": "71.65"}, ...]}`
//! - **Keyed by date**: `{"Time Series (Daily)": {"2024-01-02": {"4. close": "71.65"}}}`
//!
//! [`decode`] tries each layout independently, merges the accepted points and
//! sorts them ascending. Payloads carrying a quota notice are reported as
//! [`SeriesOutcome::RateLimited`] before any price parsing happens.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::{TimeSeriesPoint, UtcDateTime};

/// Top-level fields the provider uses for quota and throttling notices.
pub const RATE_LIMIT_FIELDS: [&str; 2] = ["Note", "Information"];

/// Prefix of the field holding the date-keyed series.
pub const KEYED_SERIES_PREFIX: &str = "Time Series";

/// Close-price aliases inside a date-keyed record, checked in order.
pub const CLOSE_ALIASES: [&str; 4] = ["4. close", "close", "4a. close (USD)", "5. adjusted close"];

/// Provider convention for "no observation on this date".
const NO_DATA_SENTINEL: &str = ".";

/// Payload layouts understood by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    FlatList,
    KeyedByDate,
}

/// Why a single record was left out of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    MissingDate,
    InvalidDate,
    MissingValue,
    NoDataSentinel,
    NotANumber,
    NonFinite,
}

/// Per-record validation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordDecision {
    Accept(TimeSeriesPoint),
    Skip(SkipReason),
}

/// Result of decoding one provider payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesOutcome {
    /// At least one layout was recognized. `points` may still be empty.
    Points {
        points: Vec<TimeSeriesPoint>,
        shapes: Vec<PayloadShape>,
        skipped: usize,
    },
    /// The provider answered with a quota notice instead of data.
    RateLimited { notice: String },
    /// Not an object, or no recognized layout.
    NoData,
}

impl SeriesOutcome {
    pub fn points(&self) -> &[TimeSeriesPoint] {
        match self {
            Self::Points { points, .. } => points,
            Self::RateLimited { .. } | Self::NoData => &[],
        }
    }

    pub fn into_points(self) -> Vec<TimeSeriesPoint> {
        match self {
            Self::Points { points, .. } => points,
            Self::RateLimited { .. } | Self::NoData => Vec::new(),
        }
    }

    pub fn skipped(&self) -> usize {
        match self {
            Self::Points { skipped, .. } => *skipped,
            Self::RateLimited { .. } | Self::NoData => 0,
        }
    }

    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[derive(Debug, Deserialize)]
struct FlatListPayload {
    data: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct FlatRecord {
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    close: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct KeyedPayload {
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl KeyedPayload {
    fn series(&self) -> impl Iterator<Item = &serde_json::Map<String, Value>> {
        self.fields
            .iter()
            .filter(|(key, _)| key.starts_with(KEYED_SERIES_PREFIX))
            .filter_map(|(_, value)| value.as_object())
    }
}

/// Normalizes an optional payload into an ascending point sequence.
///
/// `None` stands for a failed fetch and yields an empty sequence.
pub fn normalize(payload: Option<&Value>) -> Vec<TimeSeriesPoint> {
    payload.map(decode).unwrap_or(SeriesOutcome::NoData).into_points()
}

/// Decodes one provider payload.
pub fn decode(payload: &Value) -> SeriesOutcome {
    let Some(object) = payload.as_object() else {
        return SeriesOutcome::NoData;
    };

    if let Some(notice) = rate_limit_notice(object) {
        return SeriesOutcome::RateLimited { notice };
    }

    let mut points = Vec::new();
    let mut shapes = Vec::new();
    let mut skipped = 0_usize;

    let mut absorb = |decision: RecordDecision, points: &mut Vec<TimeSeriesPoint>| match decision {
        RecordDecision::Accept(point) => points.push(point),
        RecordDecision::Skip(reason) => {
            trace!(?reason, "skipping provider record");
            skipped += 1;
        }
    };

    if let Ok(flat) = FlatListPayload::deserialize(payload) {
        shapes.push(PayloadShape::FlatList);
        for record in &flat.data {
            absorb(classify_flat_record(record), &mut points);
        }
    }

    if let Ok(keyed) = KeyedPayload::deserialize(payload) {
        let mut recognized = false;
        for series in keyed.series() {
            recognized = true;
            for (date, record) in series {
                absorb(classify_keyed_record(date, record), &mut points);
            }
        }
        if recognized {
            shapes.push(PayloadShape::KeyedByDate);
        }
    }

    if shapes.is_empty() {
        return SeriesOutcome::NoData;
    }

    // Stable: equal timestamps keep encounter order.
    points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    SeriesOutcome::Points {
        points,
        shapes,
        skipped,
    }
}

/// Validates one `{date, value}` record from the flat list.
pub fn classify_flat_record(record: &Value) -> RecordDecision {
    let Ok(record) = FlatRecord::deserialize(record) else {
        return RecordDecision::Skip(SkipReason::NotAnObject);
    };

    let timestamp = match record.date.as_ref().and_then(Value::as_str) {
        Some(date) if !date.trim().is_empty() => match UtcDateTime::parse_provider_date(date) {
            Ok(timestamp) => timestamp,
            Err(_) => return RecordDecision::Skip(SkipReason::InvalidDate),
        },
        _ => return RecordDecision::Skip(SkipReason::MissingDate),
    };

    let Some(raw) = record.value.as_ref().or(record.close.as_ref()) else {
        return RecordDecision::Skip(SkipReason::MissingValue);
    };

    match parse_price(raw) {
        Ok(price) => RecordDecision::Accept(TimeSeriesPoint::new(timestamp, price)),
        Err(reason) => RecordDecision::Skip(reason),
    }
}

/// Validates one `date -> {close aliases}` entry from the keyed series.
pub fn classify_keyed_record(date: &str, record: &Value) -> RecordDecision {
    let Some(fields) = record.as_object() else {
        return RecordDecision::Skip(SkipReason::NotAnObject);
    };

    let Ok(timestamp) = UtcDateTime::parse_provider_date(date) else {
        return RecordDecision::Skip(SkipReason::InvalidDate);
    };

    let Some(raw) = CLOSE_ALIASES
        .iter()
        .find_map(|alias| fields.get(*alias).filter(|value| !value.is_null()))
    else {
        return RecordDecision::Skip(SkipReason::MissingValue);
    };

    match parse_price(raw) {
        Ok(price) => RecordDecision::Accept(TimeSeriesPoint::new(timestamp, price)),
        Err(reason) => RecordDecision::Skip(reason),
    }
}

/// Parses a provider price, given either as a JSON number or a numeric string.
pub fn parse_price(raw: &Value) -> Result<f64, SkipReason> {
    let price = match raw {
        Value::Number(number) => number.as_f64().ok_or(SkipReason::NotANumber)?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() || text == NO_DATA_SENTINEL {
                return Err(SkipReason::NoDataSentinel);
            }
            text.parse::<f64>().map_err(|_| SkipReason::NotANumber)?
        }
        _ => return Err(SkipReason::NotANumber),
    };

    if price.is_finite() {
        Ok(price)
    } else {
        Err(SkipReason::NonFinite)
    }
}

fn rate_limit_notice(object: &serde_json::Map<String, Value>) -> Option<String> {
    RATE_LIMIT_FIELDS.iter().find_map(|field| {
        object.get(*field).map(|notice| match notice {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    })
}
