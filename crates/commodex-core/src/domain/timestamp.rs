use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

/// RFC3339 timestamp guaranteed to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339).map_err(|_| {
            ValidationError::TimestampNotUtc {
                value: input.to_owned(),
            }
        })?;

        Self::from_offset_datetime(parsed).map_err(|_| ValidationError::TimestampNotUtc {
            value: input.to_owned(),
        })
    }

    /// Parses the date keys the provider emits.
    ///
    /// Daily series use `YYYY-MM-DD` (read as midnight UTC); intraday series
    /// use `YYYY-MM-DD HH:MM:SS`. Full RFC3339 UTC timestamps are accepted too.
    pub fn parse_provider_date(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let invalid = || ValidationError::InvalidProviderDate {
            value: input.to_owned(),
        };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        if let Ok(date) = Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
            return Ok(Self(date.midnight().assume_utc()));
        }

        if let Ok(datetime) = PrimitiveDateTime::parse(
            trimmed,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        ) {
            return Ok(Self(datetime.assume_utc()));
        }

        Self::parse(trimmed).map_err(|_| invalid())
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Result<Self, ValidationError> {
        if value.offset() != UtcOffset::UTC {
            return Err(ValidationError::TimestampNotUtc {
                value: value
                    .format(&Rfc3339)
                    .unwrap_or_else(|_| String::from("<unformattable>")),
            });
        }

        Ok(Self(value))
    }

    /// Instant `duration` earlier, or `None` when it falls outside the representable range.
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.0.checked_sub(duration).map(Self)
    }

    /// Absolute distance between two instants.
    pub fn distance(self, other: Self) -> Duration {
        (self.0 - other.0).abs()
    }

    pub fn format_rfc3339(self) -> String {
        // Every UTC OffsetDateTime in the supported year range formats as RFC3339.
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utc_timestamp() {
        let parsed = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn rejects_non_utc_timestamp() {
        let err = UtcDateTime::parse("2024-01-01T01:00:00+01:00").expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampNotUtc { .. }));
    }

    #[test]
    fn daily_provider_date_is_midnight_utc() {
        let parsed = UtcDateTime::parse_provider_date("2024-03-15").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-03-15T00:00:00Z");
    }

    #[test]
    fn intraday_provider_date_keeps_time_of_day() {
        let parsed = UtcDateTime::parse_provider_date("2024-03-15 16:30:00").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-03-15T16:30:00Z");
    }

    #[test]
    fn rejects_garbage_provider_date() {
        for input in ["", "   ", "yesterday", "2024-13-01", "15/03/2024"] {
            let err = UtcDateTime::parse_provider_date(input).expect_err("must fail");
            assert!(matches!(err, ValidationError::InvalidProviderDate { .. }));
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("valid");
        let b = UtcDateTime::parse("2024-01-02T00:00:00Z").expect("valid");
        assert_eq!(a.distance(b), Duration::hours(24));
        assert_eq!(b.distance(a), Duration::hours(24));
    }
}
