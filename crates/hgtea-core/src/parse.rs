//! Parsing of the free-form date, time and steep time fields of a log entry.
//!
//! Dates are written `M/DD/YYYY` (month without padding, two-digit day,
//! four-digit year) and times as 24-hour `HHMM`. Steep times are
//! whitespace-separated `<number><unit>` tokens such as `4m 20s`.
//!
//! A zero-padded month such as `05/11/2009` is accepted, but it formats back
//! as `5/11/2009`; only the unpadded month form round-trips exactly.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})/([0-9]{2})/([0-9]{4})$").unwrap());

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{2})([0-9]{2})$").unwrap());

static STEEP_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([[:alpha:]]+)$").unwrap());

/// `chrono` format string matching the accepted date pattern.
pub const DATE_FORMAT: &str = "%-m/%d/%Y";

/// `chrono` format string matching the accepted time pattern.
pub const TIME_FORMAT: &str = "%H%M";

/// Errors from parsing entry fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The date did not look like `M/DD/YYYY`.
    #[error("invalid date {value:?}, expected M/DD/YYYY")]
    InvalidDate { value: String },

    /// The time did not look like `HHMM`.
    #[error("invalid time {value:?}, expected HHMM")]
    InvalidTime { value: String },

    /// A steep time token was not `<number><unit>`.
    #[error("invalid steep time token {token:?}, expected <number><unit>")]
    InvalidDuration { token: String },

    /// A steep time token used a unit other than `h`, `m` or `s`.
    #[error("unknown steep time unit {unit:?} in {token:?}")]
    UnknownUnit { token: String, unit: String },

    /// The value was well formed but names no real date, time or duration.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Parses a `M/DD/YYYY` date and an `HHMM` time into a UTC instant.
pub fn parse_date_time(date: &str, time: &str) -> Result<DateTime<Utc>, ParseError> {
    if date.is_empty() {
        return Err(ParseError::Empty { field: "date" });
    }
    if time.is_empty() {
        return Err(ParseError::Empty { field: "time" });
    }

    let Some(date_caps) = DATE_RE.captures(date) else {
        return Err(ParseError::InvalidDate {
            value: date.to_string(),
        });
    };
    let Some(time_caps) = TIME_RE.captures(time) else {
        return Err(ParseError::InvalidTime {
            value: time.to_string(),
        });
    };

    let date_out_of_range = || ParseError::OutOfRange {
        field: "date",
        value: date.to_string(),
    };
    let time_out_of_range = || ParseError::OutOfRange {
        field: "time",
        value: time.to_string(),
    };

    let month: u32 = date_caps[1].parse().map_err(|_| date_out_of_range())?;
    let day: u32 = date_caps[2].parse().map_err(|_| date_out_of_range())?;
    let year: i32 = date_caps[3].parse().map_err(|_| date_out_of_range())?;
    let hour: u32 = time_caps[1].parse().map_err(|_| time_out_of_range())?;
    let minute: u32 = time_caps[2].parse().map_err(|_| time_out_of_range())?;

    let naive_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(date_out_of_range)?;
    let naive = naive_date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(time_out_of_range)?;

    Ok(naive.and_utc())
}

/// Parses a steep time such as `4m 20s` or `1h 2m 3s`.
///
/// Tokens are summed, so `1m 1m` is two minutes.
pub fn parse_steep_time(s: &str) -> Result<Duration, ParseError> {
    let mut tokens = s.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(ParseError::Empty { field: "steep time" });
    }

    let out_of_range = || ParseError::OutOfRange {
        field: "steep time",
        value: s.to_string(),
    };

    let mut total_secs: i64 = 0;
    for token in tokens {
        let Some(caps) = STEEP_TOKEN_RE.captures(token) else {
            return Err(ParseError::InvalidDuration {
                token: token.to_string(),
            });
        };

        let secs_per_unit = match &caps[2] {
            "h" => 3600,
            "m" => 60,
            "s" => 1,
            unit => {
                return Err(ParseError::UnknownUnit {
                    token: token.to_string(),
                    unit: unit.to_string(),
                });
            }
        };

        let n: i64 = caps[1].parse().map_err(|_| out_of_range())?;
        total_secs = n
            .checked_mul(secs_per_unit)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or_else(out_of_range)?;
    }

    Duration::try_seconds(total_secs).ok_or_else(out_of_range)
}

/// Formats the date half of an instant as `M/DD/YYYY`.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Formats the time half of an instant as `HHMM`.
pub fn format_time(dt: &DateTime<Utc>) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Formats a steep time in the same token form [`parse_steep_time`] reads.
///
/// Zero-valued units are left out; a zero duration is `0s`.
pub fn format_steep_time(d: &Duration) -> String {
    let total = d.num_seconds();
    if total == 0 {
        return "0s".to_string();
    }

    let (sign, total) = if total < 0 { ("-", -total) } else { ("", total) };
    let parts: Vec<String> = [(total / 3600, 'h'), (total % 3600 / 60, 'm'), (total % 60, 's')]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n}{unit}"))
        .collect();

    format!("{sign}{}", parts.join(" "))
}
