use crate::core::calculator::shift::ShiftResult;
use crate::errors::AppResult;
use crate::utils::date::weekday_name;
use crate::utils::formatting::{format_duration, parse_duration};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored day. The date is the key of the store, not a field.
///
/// Field names on disk follow the historical `registro_orari.json` layout.
/// Missing fields load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "giorno", default)]
    pub weekday: String,
    #[serde(rename = "ingresso", default)]
    pub entry: String,
    #[serde(rename = "uscita", default)]
    pub exit: String,
    #[serde(rename = "lavorato", default)]
    pub worked: String,
    #[serde(rename = "residuo", default)]
    pub residual: String,
}

impl DailyRecord {
    /// Build a full record from a computed shift. Worked and residual are
    /// always written together from the same computation.
    pub fn new(date: NaiveDate, shift: &ShiftResult) -> Self {
        Self {
            weekday: weekday_name(date).to_string(),
            entry: shift.entry.format("%H:%M").to_string(),
            exit: shift.exit.format("%H:%M").to_string(),
            worked: format_duration(shift.worked),
            residual: format_duration(shift.residual),
        }
    }

    /// Residual in minutes; an empty field counts as zero.
    pub fn residual_minutes(&self) -> AppResult<i64> {
        minutes_or_zero(&self.residual)
    }

    /// Worked time in minutes; an empty field counts as zero.
    pub fn worked_minutes(&self) -> AppResult<i64> {
        minutes_or_zero(&self.worked)
    }
}

fn minutes_or_zero(s: &str) -> AppResult<i64> {
    if s.trim().is_empty() {
        Ok(0)
    } else {
        parse_duration(s)
    }
}
