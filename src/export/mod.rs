// src/export/mod.rs

mod json_csv;
pub mod logic;
mod model;
mod target;

pub use json_csv::{write_csv, write_json};
pub use logic::ExportLogic;
pub use model::{ExportRow, HEADERS, to_table};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Final line printed after a successful export.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} rows)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
