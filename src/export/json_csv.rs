// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{ExportRow, HEADERS};
use std::io::Write;

/// CSV with the `Data,Giorno,...` header row, written even when `rows`
/// is empty.
pub fn write_csv<W: Write>(out: W, rows: &[ExportRow]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;
    Ok(())
}

/// JSON pretty-printed array of rows.
pub fn write_json<W: Write>(mut out: W, rows: &[ExportRow]) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;
    out.write_all(json_data.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
