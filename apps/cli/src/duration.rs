//! `--interval` parsing.
//!
//! Accepts the `<number><unit>` sequences familiar from Go tooling:
//! `500ms`, `1s`, `1.5s`, `1m30s`, `2h`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("duration must be positive: {0:?}")]
    NotPositive(String),

    #[error("missing unit in duration {0:?} (use ns, us, ms, s, m or h)")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("invalid number in duration {0:?}")]
    InvalidNumber(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 3600 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

/// `<int>[.<frac>]` scaled by `unit`, in nanoseconds.
fn scaled_nanos(number: &str, unit: u128) -> Option<u128> {
    let (int, frac) = number.split_once('.').unwrap_or((number, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int) || !all_digits(frac) {
        return None;
    }

    let int: u128 = if int.is_empty() { 0 } else { int.parse().ok()? };
    let mut nanos = int.checked_mul(unit)?;

    if !frac.is_empty() {
        // Digits beyond nanosecond precision are dropped.
        let frac = &frac[..frac.len().min(18)];
        let scale = 10u128.pow(frac.len() as u32);
        let frac: u128 = frac.parse().ok()?;
        nanos = nanos.checked_add(frac.checked_mul(unit)? / scale)?;
    }

    Some(nanos)
}

pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DurationError::Empty);
    }
    if s.starts_with('-') || s == "0" || s == "+0" {
        return Err(DurationError::NotPositive(input.to_string()));
    }

    let mut rest = s.strip_prefix('+').unwrap_or(s);
    let mut total: u128 = 0;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        total = scaled_nanos(number, scale)
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(|| DurationError::InvalidNumber(input.to_string()))?;
        rest = next;
    }

    if total == 0 {
        return Err(DurationError::NotPositive(input.to_string()));
    }

    let secs = u64::try_from(total / 1_000_000_000)
        .map_err(|_| DurationError::InvalidNumber(input.to_string()))?;
    Ok(Duration::new(secs, (total % 1_000_000_000) as u32))
}
