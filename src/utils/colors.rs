/// ANSI color helper utilities for terminal output.
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

static NO_COLOR: LazyLock<bool> = LazyLock::new(|| std::env::var_os("NO_COLOR").is_some());

/// True when `NO_COLOR` is set.
pub fn no_color() -> bool {
    *NO_COLOR
}

/// Wrap `text` in `color` … RESET, or return it bare under `NO_COLOR`.
pub fn paint(color: &str, text: &str) -> String {
    if no_color() {
        text.to_string()
    } else {
        format!("{color}{text}{RESET}")
    }
}

/// Residual color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_residual(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Grey out empty cells so a record with missing fields is easy to spot.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        paint(GREY, "--:--")
    } else {
        value.to_string()
    }
}
