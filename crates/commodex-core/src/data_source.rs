//! Series source contract and its error type.
//!
//! A [`SeriesSource`] returns the raw provider payload for one commodity.
//! Interpretation of that payload belongs to [`crate::normalize`].

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::http_client::HttpError;
use crate::Commodity;

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Network failure before a response arrived.
    Transport,
    /// The per-call timeout elapsed.
    Timeout,
    /// The provider answered with a non-success status.
    Status,
    /// The body was not valid JSON.
    Decode,
}

/// Structured error for a single commodity fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Timeout,
            message: message.into(),
        }
    }

    /// Classifies a transport failure, keeping timeouts apart.
    pub fn from_http(error: &HttpError, context: &str) -> Self {
        let message = format!("{context}: {}", error.message());
        if error.timed_out() {
            Self::timeout(message)
        } else {
            Self::transport(message)
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            kind: SourceErrorKind::Status,
            message: format!("upstream returned status {status}"),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Decode,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::Timeout => "source.timeout",
            SourceErrorKind::Status => "source.status",
            SourceErrorKind::Decode => "source.decode",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Fetches the raw payload for one commodity series.
pub trait SeriesSource: Send + Sync {
    fn fetch_series<'a>(
        &'a self,
        commodity: Commodity,
    ) -> Pin<Box<dyn Future<Output = Result<Value, SourceError>> + Send + 'a>>;
}
