//! JSON file holding every daily record, keyed by ISO date.
//!
//! Each mutation reloads the file, applies the change to that fresh
//! snapshot and rewrites the whole collection before returning.

use crate::errors::{AppError, AppResult};
use crate::models::DailyRecord;
use crate::utils::path::with_suffix;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub type Records = BTreeMap<String, DailyRecord>;

fn persistence(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::Persistence(format!("{}: {e}", path.display()))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty store file if none exists. Returns true when created.
    pub fn init(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| persistence(parent, e))?;
        }
        self.write_all(&Records::new())?;
        Ok(true)
    }

    /// Every stored record. A missing or empty file is an empty collection.
    pub fn load_all(&self) -> AppResult<Records> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Records::new()),
            Err(e) => return Err(persistence(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Records::new());
        }

        serde_json::from_str(&content).map_err(|e| persistence(&self.path, e))
    }

    pub fn get(&self, date: NaiveDate) -> AppResult<Option<DailyRecord>> {
        Ok(self.load_all()?.remove(&date_key(date)))
    }

    /// Store `record` under `date`, replacing any previous record entirely.
    pub fn upsert(&self, date: NaiveDate, record: DailyRecord) -> AppResult<()> {
        let mut records = self.load_all()?;
        records.insert(date_key(date), record);
        self.write_all(&records)?;
        tracing::debug!(date = %date, path = %self.path.display(), "record stored");
        Ok(())
    }

    /// Remove the record for `date`. Absent dates are a no-op (`Ok(false)`),
    /// and the file is left untouched in that case.
    pub fn delete(&self, date: NaiveDate) -> AppResult<bool> {
        let mut records = self.load_all()?;
        if records.remove(&date_key(date)).is_none() {
            tracing::debug!(date = %date, "delete: no record");
            return Ok(false);
        }
        self.write_all(&records)?;
        tracing::debug!(date = %date, path = %self.path.display(), "record deleted");
        Ok(true)
    }

    /// Pretty-printed rewrite via a sibling temp file renamed over the store.
    fn write_all(&self, records: &Records) -> AppResult<()> {
        let json = serde_json::to_string_pretty(records).map_err(|e| persistence(&self.path, e))?;

        let tmp = with_suffix(&self.path, "tmp");
        let result = (|| -> io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        })();

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(persistence(&self.path, e));
        }
        Ok(())
    }
}
