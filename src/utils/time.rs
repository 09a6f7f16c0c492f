//! Time utilities: strict HH:MM parsing and minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid HH:MM regex"));

/// Parse a wall-clock time in the strict `HH:MM` form (`09:05`, not `9:5`).
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let s = t.trim();
    if !HHMM.is_match(s) {
        return Err(AppError::InvalidFormat(t.to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| AppError::InvalidFormat(t.to_string()))
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}
