//! DateTime parsing utilities with consistent error handling.
//!
//! The backend has emitted timestamps in three shapes over time: RFC3339,
//! HTTP dates (`Wed, 01 Jan 2025 00:00:00 GMT`, from Flask's `jsonify`) and
//! naive ISO strings without an offset (assumed UTC).

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a timestamp in any of the formats the backend produces.
///
/// # Examples
///
/// ```
/// use storymaker_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("Wed, 01 Jan 2025 10:30:00 GMT").unwrap();
/// assert_eq!(dt.year(), 2025);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string matches none of the formats.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
}

/// Serde adapter: writes RFC3339, reads any format accepted by [`parse_datetime`].
pub mod flexible {
    use chrono::{DateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw).map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_datetime_rfc3339() {
        let dt = parse_datetime("2024-01-15T10:30:00+05:00").unwrap();
        assert_eq!(dt.hour(), 5);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_http_date() {
        let dt = parse_datetime("Mon, 15 Jan 2024 10:30:00 GMT").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 15));
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_datetime_naive_is_utc() {
        let dt = parse_datetime("2024-01-15T10:30:00.123456").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-date").is_err());
        assert!(parse_datetime("").is_err());
    }
}
