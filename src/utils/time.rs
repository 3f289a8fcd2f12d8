//! Time-of-day parsing for punch arguments and record values.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static HH_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("static HH:MM pattern")
});

/// Validate a user supplied `HH:MM` (strict, 24-hour, two-digit hour).
pub fn parse_hhmm(t: &str) -> AppResult<String> {
    let t = t.trim();
    if HH_MM.is_match(t) {
        Ok(t.to_string())
    } else {
        Err(AppError::InvalidTime(t.to_string()))
    }
}

/// Times coming back from the service are `HH:MM:SS`; `HH:MM` is tolerated.
pub fn parse_record_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
