use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::data_source::{SeriesSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::Commodity;

/// Provider interval requested for every commodity series.
pub const SERIES_INTERVAL: &str = "daily";

/// Alpha Vantage commodity series feed.
#[derive(Clone)]
pub struct AlphaVantageFeed {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl AlphaVantageFeed {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_ms,
        }
    }

    /// Builds the outbound request selecting `commodity`'s daily series.
    pub fn request_for(&self, commodity: Commodity) -> HttpRequest {
        let query = commodity.provider_query();
        let mut request = HttpRequest::get(&self.base_url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms)
            .with_query("function", query.function);

        if let Some(symbol) = query.symbol {
            request = request.with_query("symbol", symbol);
        }

        request
            .with_query("interval", SERIES_INTERVAL)
            .with_secret_query("apikey", &self.api_key)
            .with_query("datatype", "json")
    }

    async fn fetch(&self, commodity: Commodity) -> Result<Value, SourceError> {
        let request = self.request_for(commodity);
        debug!(%commodity, url = %request.redacted_url(), "fetching alphavantage series");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| SourceError::from_http(&error, "alphavantage transport error"))?;

        if !response.is_success() {
            return Err(SourceError::status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            SourceError::decode(format!("failed to parse alphavantage response: {error}"))
        })
    }
}

impl SeriesSource for AlphaVantageFeed {
    fn fetch_series<'a>(
        &'a self,
        commodity: Commodity,
    ) -> Pin<Box<dyn Future<Output = Result<Value, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch(commodity))
    }
}
