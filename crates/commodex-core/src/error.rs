use thiserror::Error;

/// Validation and contract errors exposed by `commodex-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "unknown commodity '{value}', expected one of WTI, BRENT, NATGAS, GOLD, SILVER, COPPER, WHEAT"
    )]
    UnknownCommodity { value: String },

    #[error("invalid sector '{value}', expected one of energy, metals, agriculture")]
    InvalidSector { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("provider date must look like YYYY-MM-DD or YYYY-MM-DD HH:MM:SS: '{value}'")]
    InvalidProviderDate { value: String },

    #[error("base url must be an absolute http(s) url: '{value}'")]
    InvalidBaseUrl { value: String },

    #[error("field '{field}' must be greater than zero")]
    NonPositiveValue { field: &'static str },
}
