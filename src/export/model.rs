// src/export/model.rs

use crate::models::DailyRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// CSV header, in column order.
pub const HEADERS: [&str; 6] = [
    "Data",
    "Giorno",
    "Ingresso",
    "Uscita",
    "Ore Lavorate",
    "Residuo",
];

/// One exported day, every value already formatted.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Giorno")]
    pub weekday: String,
    #[serde(rename = "Ingresso")]
    pub entry: String,
    #[serde(rename = "Uscita")]
    pub exit: String,
    #[serde(rename = "Ore Lavorate")]
    pub worked: String,
    #[serde(rename = "Residuo")]
    pub residual: String,
}

impl ExportRow {
    /// Values in `HEADERS` order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.weekday.as_str(),
            self.entry.as_str(),
            self.exit.as_str(),
            self.worked.as_str(),
            self.residual.as_str(),
        ]
    }
}

/// Rows sorted by date. ISO keys sort lexicographically in date order,
/// which the `BTreeMap` already guarantees.
pub fn to_table(records: &BTreeMap<String, DailyRecord>) -> Vec<ExportRow> {
    records
        .iter()
        .map(|(date, rec)| ExportRow {
            date: date.clone(),
            weekday: rec.weekday.clone(),
            entry: rec.entry.clone(),
            exit: rec.exit.clone(),
            worked: rec.worked.clone(),
            residual: rec.residual.clone(),
        })
        .collect()
}
