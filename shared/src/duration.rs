//! Duration strings in records
//!
//! Records carry durations such as `1h30m`, `45m`, `0.5h` or `2h15m30s`:
//! an optional sign followed by one or more `<number><unit>` groups, where
//! the unit is one of `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`. A bare `0`
//! is also accepted. Negative and zero durations parse fine; range checks
//! happen in [`crate::validation`].

use crate::errors::RecordError;
use chrono::Duration;
use regex_lite::Regex;
use std::sync::OnceLock;

const NANOS_PER_MINUTE: f64 = 60.0 * 1e9;
const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MINUTE;

fn full_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:ns|us|µs|μs|ms|s|m|h))+$")
            .expect("duration pattern is valid")
    })
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+\.?[0-9]*|\.[0-9]+)(ns|us|µs|μs|ms|s|m|h)")
            .expect("duration token pattern is valid")
    })
}

/// Length of one unit in nanoseconds
fn unit_nanos(unit: &str) -> Option<i64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

/// Nanoseconds for a single `<number><unit>` group
fn token_nanos(number: &str, unit: i64) -> Option<i64> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };

    let whole_nanos = if whole.is_empty() {
        0
    } else {
        whole.parse::<i64>().ok()?.checked_mul(unit)?
    };

    let fraction_nanos = if fraction.is_empty() {
        0
    } else {
        let value: f64 = format!("0.{fraction}").parse().ok()?;
        (value * unit as f64).round() as i64
    };

    whole_nanos.checked_add(fraction_nanos)
}

/// Parse a duration string such as `1h30m` into a signed duration
pub fn parse_duration(input: &str) -> Result<Duration, RecordError> {
    let invalid = || RecordError::InvalidDuration(input.to_string());

    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if body == "0" {
        return Ok(Duration::zero());
    }
    if !full_pattern().is_match(input) {
        return Err(invalid());
    }

    let mut total: i64 = 0;
    for caps in token_pattern().captures_iter(body) {
        let unit = unit_nanos(&caps[2]).ok_or_else(invalid)?;
        let nanos = token_nanos(&caps[1], unit).ok_or_else(invalid)?;
        total = total.checked_add(nanos).ok_or_else(invalid)?;
    }

    Ok(Duration::nanoseconds(if negative { -total } else { total }))
}

/// Fractional number of hours in a duration
pub fn hours(duration: &Duration) -> f64 {
    nanos(duration) / NANOS_PER_HOUR
}

/// Fractional number of minutes in a duration
pub fn minutes(duration: &Duration) -> f64 {
    nanos(duration) / NANOS_PER_MINUTE
}

fn nanos(duration: &Duration) -> f64 {
    duration
        .num_nanoseconds()
        .map(|n| n as f64)
        .unwrap_or_else(|| duration.num_milliseconds() as f64 * 1e6)
}
