//! Worked time and residual for a single day.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_between, parse_time};
use chrono::NaiveTime;

/// Outcome of one entry/exit computation. Durations in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResult {
    pub entry: NaiveTime,
    pub exit: NaiveTime,
    pub worked: i64,
    pub residual: i64,
}

/// Computes worked/residual time against a fixed standard shift.
#[derive(Debug, Clone, Copy)]
pub struct ShiftCalculator {
    standard_shift: i64,
}

impl ShiftCalculator {
    pub fn new(standard_shift_minutes: i64) -> Self {
        Self {
            standard_shift: standard_shift_minutes,
        }
    }

    /// Parse both times, check the order, derive worked and residual.
    ///
    /// Exit must be strictly after entry on the same day; there is no
    /// overnight shift.
    pub fn compute(&self, entry: &str, exit: &str) -> AppResult<ShiftResult> {
        let t_entry = parse_time(entry)?;
        let t_exit = parse_time(exit)?;

        if t_exit <= t_entry {
            return Err(AppError::InvalidOrder {
                entry: entry.trim().to_string(),
                exit: exit.trim().to_string(),
            });
        }

        let worked = minutes_between(t_entry, t_exit);

        Ok(ShiftResult {
            entry: t_entry,
            exit: t_exit,
            worked,
            residual: worked - self.standard_shift,
        })
    }
}
