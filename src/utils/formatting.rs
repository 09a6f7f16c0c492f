//! Formatting utilities used for CLI and export outputs.
//!
//! Durations travel through the program as signed minutes (`i64`) and are
//! turned into the `{sign}{h}h {m}m` text only here.

use crate::errors::{AppError, AppResult};
use crate::utils::colors::paint;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-)?(\d+)h(?:\s*(\d+)m)?$").expect("valid duration regex")
});

pub fn bold(s: &str) -> String {
    paint("\x1b[1m", s)
}

/// Pad on the right using the displayed width, so weekday names with
/// accents or emoji markers keep the columns aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Render minutes as `8h 0m`, `0h 18m`, `-0h 42m`.
pub fn format_duration(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{}h {}m", sign, abs_m / 60, abs_m % 60)
}

/// Inverse of [`format_duration`].
///
/// Accepts an optional leading `-` and the `Nh Mm` tokens, with or without
/// the separating whitespace (`7h 42m`, `7h42m`). A bare `Nh` is read as
/// whole hours.
pub fn parse_duration(s: &str) -> AppResult<i64> {
    let caps = DURATION
        .captures(s.trim())
        .ok_or_else(|| AppError::InvalidFormat(s.to_string()))?;

    let hours: i64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidFormat(s.to_string()))?;
    let minutes: i64 = match caps.get(3) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| AppError::InvalidFormat(s.to_string()))?,
        None => 0,
    };

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| AppError::InvalidFormat(s.to_string()))?;
    Ok(if caps.get(1).is_some() { -total } else { total })
}

/// Hours with two decimals, used by the chart output (`7.50h`).
pub fn mins2hours(mins: i64) -> String {
    format!("{:.2}h", mins as f64 / 60.0)
}
