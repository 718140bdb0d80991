//! Local-timezone normalization for user-supplied times and query ranges.
//!
//! The service speaks UTC; users type wall-clock times. Everything here
//! interprets naive input in the local timezone and converts to UTC for
//! request parameters.

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use thiserror::Error;

/// Error from parsing a user-supplied date/time string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized date/time '{input}'")]
pub struct TimeParseError {
    pub input: String,
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parses a user-supplied time string into a UTC instant.
///
/// Accepts RFC 3339 (used verbatim), a naive date-time, a bare date
/// (midnight), or a bare time (on `today`). Naive forms are interpreted in
/// the local timezone.
pub fn parse_local(input: &str, today: NaiveDate) -> Result<DateTime<Utc>, TimeParseError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(resolve_local(naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(resolve_local(date.and_time(NaiveTime::MIN)));
    }

    for fmt in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(input, fmt) {
            return Ok(resolve_local(today.and_time(time)));
        }
    }

    Err(TimeParseError {
        input: input.to_string(),
    })
}

/// Resolves a naive local datetime to UTC.
/// Handles DST ambiguity by picking the earlier time.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        // Single or ambiguous (DST fall-back): use the earlier time
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            // DST spring-forward gap: one hour later is guaranteed to exist
            let later = naive + chrono::Duration::hours(1);
            match Local.from_local_datetime(&later) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                LocalResult::None => Utc.from_utc_datetime(&naive),
            }
        }
    }
}

/// Converts a local date at midnight to UTC.
pub fn local_midnight_to_utc(date: NaiveDate) -> DateTime<Utc> {
    resolve_local(date.and_time(NaiveTime::MIN))
}

/// Default listing range: Monday of the current week at local midnight
/// through today 23:59:59 local, both as UTC.
pub fn default_query_range(today: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let days_since_monday = today.weekday().num_days_from_monday();
    let monday = today - chrono::Duration::days(i64::from(days_since_monday));

    let start = local_midnight_to_utc(monday);
    let end = resolve_local(today.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
    (start, end)
}
