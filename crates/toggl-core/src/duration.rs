//! Duration parsing and human-readable elapsed-time formatting.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from parsing a `[[H:]M:]S` duration string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The input was empty.
    #[error("duration cannot be empty")]
    Empty,

    /// The input had more than three `:`-separated segments.
    #[error("too many segments in duration '{input}'")]
    TooManySegments { input: String },

    /// A segment was not a non-negative integer.
    #[error("invalid duration segment '{segment}'")]
    InvalidSegment { segment: String },
}

/// Parses a duration of the form `[[hours:]minutes:]seconds` into total seconds.
pub fn parse_duration(input: &str) -> Result<i64, DurationError> {
    if input.trim().is_empty() {
        return Err(DurationError::Empty);
    }

    let segments: Vec<&str> = input.split(':').collect();
    if segments.len() > 3 {
        return Err(DurationError::TooManySegments {
            input: input.to_string(),
        });
    }

    let mut total = 0_i64;
    for segment in &segments {
        let value: i64 =
            segment
                .trim()
                .parse()
                .map_err(|_| DurationError::InvalidSegment {
                    segment: (*segment).to_string(),
                })?;
        if value < 0 {
            return Err(DurationError::InvalidSegment {
                segment: (*segment).to_string(),
            });
        }
        total = total * 60 + value;
    }
    Ok(total)
}

/// Unit scheme for [`elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStyle {
    /// Years, weeks, days, hours, minutes, seconds.
    Standard,
    /// 8-hour "mandays" instead of calendar days and above.
    Mandays,
}

const STANDARD_UNITS: &[(&str, i64)] = &[
    ("y", 60 * 60 * 24 * 7 * 52),
    ("w", 60 * 60 * 24 * 7),
    ("d", 60 * 60 * 24),
    ("h", 60 * 60),
    ("m", 60),
    ("s", 1),
];

const MANDAY_UNITS: &[(&str, i64)] = &[("md", 60 * 60 * 8), ("h", 60 * 60), ("m", 60), ("s", 1)];

/// Formats a number of seconds as a human-readable elapsed time, e.g.
/// `1h 30m 5s`. Units with a zero value are skipped, and formatting stops
/// once the remainder is exhausted. Non-positive durations render as `0s`.
pub fn elapsed(seconds: i64, style: DurationStyle, separator: &str) -> String {
    if seconds <= 0 {
        return "0s".to_string();
    }

    let units = match style {
        DurationStyle::Standard => STANDARD_UNITS,
        DurationStyle::Mandays => MANDAY_UNITS,
    };

    let mut remaining = seconds;
    let mut pieces = Vec::new();
    for &(suffix, length) in units {
        let value = remaining / length;
        if value > 0 {
            remaining %= length;
            pieces.push(format!("{value}{suffix}"));
        }
        if remaining == 0 {
            break;
        }
    }
    pieces.join(separator)
}

/// Effective duration of a time entry in seconds.
///
/// A negative stored duration marks a currently running entry, which accrues
/// time from its start up to `now`.
pub fn entry_seconds(duration: i64, start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    if duration >= 0 {
        duration
    } else {
        (now - start).num_seconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_duration_seconds_only() {
        assert_eq!(parse_duration("90").unwrap(), 90);
        assert_eq!(parse_duration("0").unwrap(), 0);
    }

    #[test]
    fn parse_duration_minutes_and_seconds() {
        assert_eq!(parse_duration("2:30").unwrap(), 150);
    }

    #[test]
    fn parse_duration_hours_minutes_seconds() {
        assert_eq!(parse_duration("1:30:05").unwrap(), 5405);
        assert_eq!(parse_duration("0:0:5").unwrap(), 5);
    }

    #[test]
    fn parse_duration_rejects_empty() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("   "), Err(DurationError::Empty));
    }

    #[test]
    fn parse_duration_rejects_extra_segments() {
        assert!(matches!(
            parse_duration("1:2:3:4"),
            Err(DurationError::TooManySegments { .. })
        ));
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert!(matches!(
            parse_duration("1:abc"),
            Err(DurationError::InvalidSegment { .. })
        ));
        assert!(matches!(
            parse_duration("-5"),
            Err(DurationError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn elapsed_formats_mixed_units() {
        assert_eq!(elapsed(5405, DurationStyle::Standard, " "), "1h 30m 5s");
        assert_eq!(elapsed(3661, DurationStyle::Standard, ""), "1h1m1s");
    }

    #[test]
    fn elapsed_skips_zero_units() {
        // Exactly one hour: no trailing 0m 0s
        assert_eq!(elapsed(3600, DurationStyle::Standard, " "), "1h");
        // 1 day and 5 seconds: hours and minutes skipped
        assert_eq!(elapsed(86_405, DurationStyle::Standard, " "), "1d 5s");
    }

    #[test]
    fn elapsed_weeks_and_days() {
        let two_weeks_three_days = 60 * 60 * 24 * 17;
        assert_eq!(
            elapsed(two_weeks_three_days, DurationStyle::Standard, " "),
            "2w 3d"
        );
    }

    #[test]
    fn elapsed_mandays_uses_eight_hour_days() {
        assert_eq!(elapsed(60 * 60 * 8, DurationStyle::Mandays, " "), "1md");
        assert_eq!(
            elapsed(60 * 60 * 9 + 60, DurationStyle::Mandays, " "),
            "1md 1h 1m"
        );
    }

    #[test]
    fn elapsed_zero_and_negative() {
        assert_eq!(elapsed(0, DurationStyle::Standard, " "), "0s");
        assert_eq!(elapsed(-30, DurationStyle::Standard, " "), "0s");
    }

    #[test]
    fn entry_seconds_completed_entry_uses_stored_duration() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(entry_seconds(1800, start, now), 1800);
    }

    #[test]
    fn entry_seconds_running_entry_accrues_from_start() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 45, 30).unwrap();
        assert_eq!(entry_seconds(-1, start, now), 45 * 60 + 30);
    }

    #[test]
    fn entry_seconds_running_entry_with_future_start_is_zero() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(entry_seconds(-1, start, now), 0);
    }
}
