//! Lenient calendar-date input
//!
//! Clients send either a plain `YYYY-MM-DD` or a full RFC 3339 timestamp
//! for festival dates. Timestamps keep the calendar date in their own
//! offset.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// `deserialize_with` adapter for [`parse_calendar_date`].
pub fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| {
        de::Error::invalid_value(de::Unexpected::Str(&raw), &"a YYYY-MM-DD date or RFC 3339 timestamp")
    })
}
