//! Time-of-day parsing for the CLI and import boundaries.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;

/// Strict `HH:MM` (00:00–23:59). Rejects seconds, single-digit hours, and
/// out-of-range values before chrono sees the string.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let re = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").ok()?;
    if !re.is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input {
        Some(s) => Ok(Some(parse_required_time(s)?)),
        None => Ok(None),
    }
}
