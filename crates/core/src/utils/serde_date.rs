//! Serde helpers for calendar dates on the wire.
//!
//! Dates are always written as `YYYY-MM-DD`. On input, RFC 3339 timestamps
//! (`2024-03-05T00:00:00Z`) are accepted too, since older clients send full
//! timestamps; only the date part is kept.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::constants::DATE_FORMAT;

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient(&raw).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid date '{}', expected YYYY-MM-DD or an RFC 3339 timestamp",
            raw
        ))
    })
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date.
pub fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_accepts_both_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_lenient("2024-03-05"), Some(expected));
        assert_eq!(parse_lenient("2024-03-05T00:00:00Z"), Some(expected));
        assert_eq!(parse_lenient("2024-03-05T18:30:00-05:00"), Some(expected));
        assert_eq!(parse_lenient("yesterday"), None);
    }
}
