//! ISO-8601 conversion for temporal attributes.
//!
//! Dates travel as strings on the wire and live as [`Timestamp`] values in
//! memory. Output always uses UTC with millisecond precision
//! (`2021-01-01T00:00:00.000Z`); input accepts:
//! - RFC 3339 with `Z` or a `+hh:mm` / `+hhmm` offset
//! - zone-less date-times, read as UTC
//! - bare dates, read as midnight UTC

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Native point-in-time value held by temporal attributes.
pub type Timestamp = DateTime<Utc>;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Parses an ISO-8601 string into a native timestamp.
///
/// Pure and total over well-formed input. Malformed input is reported as
/// [`Error::InvalidTimestamp`]; no fallback value is ever substituted.
pub fn parse_iso8601(input: &str) -> Result<Timestamp> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(Error::InvalidTimestamp(format!(
        "{input:?} is not an ISO-8601 date"
    )))
}

/// Formats a timestamp the way it is sent to the remote store.
#[must_use]
pub fn format_iso8601(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drops precision below what [`format_iso8601`] can carry.
#[must_use]
pub fn truncate_to_millis(ts: Timestamp) -> Timestamp {
    ts.trunc_subsecs(3)
}
