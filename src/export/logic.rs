// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{write_csv, write_json};
use crate::export::model::to_table;
use crate::export::target::claim_target;
use crate::export::{ExportFormat, notify_export_success};
use crate::store::RecordStore;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_period;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Loads, filters and writes records for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// `range` is `None`, `"all"`, `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or a
    /// `start:end` pair of those.
    ///
    /// Returns the number of rows written (0 = nothing to export, no file).
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let mut records = store.load_all()?;
        if let Some((from, to)) = bounds {
            let (from, to) = (from.to_string(), to.to_string());
            records.retain(|k, _| *k >= from && *k <= to);
        }

        let rows = to_table(&records);

        if rows.is_empty() {
            warning("No records to export.");
            return Ok(0);
        }

        claim_target(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let file = File::create(path)
            .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
        let out = BufWriter::new(file);

        match format {
            ExportFormat::Csv => write_csv(out, &rows)?,
            ExportFormat::Json => write_json(out, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path, rows.len());
        Ok(rows.len())
    }
}
