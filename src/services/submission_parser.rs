use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::CellParseError;
use crate::models::ParsedSubmission;

static ACCEPTED_WITH_REJECTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+):([0-9]{2}):([0-9]{2})\s+\(-([0-9]+)\)$").expect("static regex")
});
static ACCEPTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]{2}):([0-9]{2})$").expect("static regex"));
static REJECTED_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(-([0-9]+)\)$").expect("static regex"));

/// Reads a standings cell, treating unreadable numbers as an untouched cell.
pub fn parse_submission(raw: &str) -> ParsedSubmission {
    try_parse_submission(raw).unwrap_or(ParsedSubmission::UNTOUCHED)
}

/// Reads a standings cell.
///
/// Recognised shapes are `H:MM:SS (-N)`, `H:MM:SS` and `(-N)`. Anything else,
/// including the empty string and `-`, is an untouched cell. An error is only
/// returned when one of those shapes matches but a number in it is unusable.
pub fn try_parse_submission(raw: &str) -> Result<ParsedSubmission, CellParseError> {
    let text = raw.trim();

    if let Some(caps) = ACCEPTED_WITH_REJECTS.captures(text) {
        let seconds = clock_seconds(raw, &caps)?;
        let rejects = number::<u32>(raw, &caps[4])?;
        return Ok(ParsedSubmission::accepted(seconds, rejects));
    }

    if let Some(caps) = ACCEPTED.captures(text) {
        let seconds = clock_seconds(raw, &caps)?;
        return Ok(ParsedSubmission::accepted(seconds, 0));
    }

    if let Some(caps) = REJECTED_ONLY.captures(text) {
        let rejects = number::<u32>(raw, &caps[1])?;
        return Ok(ParsedSubmission::rejected(rejects));
    }

    Ok(ParsedSubmission::UNTOUCHED)
}

fn clock_seconds(raw: &str, caps: &Captures<'_>) -> Result<u64, CellParseError> {
    let hours = number::<u64>(raw, &caps[1])?;
    let minutes = bounded(raw, "minutes", number::<u64>(raw, &caps[2])?)?;
    let seconds = bounded(raw, "seconds", number::<u64>(raw, &caps[3])?)?;

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or_else(|| CellParseError::Overflow {
            raw: raw.to_string(),
            fragment: caps[1].to_string(),
        })
}

fn bounded(raw: &str, field: &'static str, value: u64) -> Result<u64, CellParseError> {
    if value < 60 {
        Ok(value)
    } else {
        Err(CellParseError::OutOfRange {
            raw: raw.to_string(),
            field,
            value,
        })
    }
}

fn number<T: std::str::FromStr>(raw: &str, fragment: &str) -> Result<T, CellParseError> {
    fragment.parse::<T>().map_err(|_| CellParseError::Overflow {
        raw: raw.to_string(),
        fragment: fragment.to_string(),
    })
}
