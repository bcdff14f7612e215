mod alphavantage;

pub use alphavantage::{AlphaVantageFeed, SERIES_INTERVAL};
