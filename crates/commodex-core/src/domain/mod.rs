//! # Domain Models
//!
//! Canonical domain types for commodex.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Commodity`] | Closed set of tracked commodities, in board order |
//! | [`Sector`] | Dashboard grouping (energy, metals, agriculture) |
//! | [`ProviderQuery`] | Provider parameters selecting one series |
//! | [`TimeSeriesPoint`] | One (timestamp, price) observation |
//! | [`Quote`] | Latest price plus horizon-relative changes |
//! | [`UtcDateTime`] | UTC timestamp |

mod commodity;
mod models;
mod timestamp;

pub use commodity::{Commodity, ProviderQuery, Sector};
pub use models::{Quote, TimeSeriesPoint};
pub use timestamp::UtcDateTime;
