use std::fmt::{Debug, Formatter};

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::quote_builder::Horizons;
use crate::ValidationError;

/// Public Alpha Vantage query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Explicit provider settings handed to the board at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    api_key: Option<String>,
    pub base_url: String,
    pub timeout_ms: u64,
    pub horizons: Horizons,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            horizons: Horizons::default(),
        }
    }
}

impl ProviderConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Blank keys count as missing.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_horizons(mut self, horizons: Horizons) -> Self {
        self.horizons = horizons;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ValidationError::NonPositiveValue {
                field: "timeout_ms",
            });
        }
        Ok(())
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("horizons", &self.horizons)
            .finish()
    }
}
