use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Server-assigned identifiers are opaque strings (UUIDs or provider uids).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = DateTime<Utc>;

/// Calendar dates are sent as `YYYY-MM-DD`.
pub type Date = NaiveDate;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a server timestamp.
///
/// Accepts RFC 3339, offset-less date-times (taken as UTC) and bare dates
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Parse a server date, keeping the calendar day as written even when the
/// server sends a full date-time.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.date())
}

/// `deserialize_with` helpers for the date shapes the backend emits.
pub mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use super::{parse_date, parse_timestamp, Date, Timestamp};

    pub fn date<'de, D: Deserializer<'de>>(de: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(de)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }

    pub fn optional_date<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(de)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'"))),
        }
    }

    pub fn timestamp<'de, D: Deserializer<'de>>(de: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(de)?;
        parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}
