use crate::errors::AppResult;
use crate::utils::path::with_suffix;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// The audit log lives next to the store: `<store>.log`.
pub fn log_path(store: &Path) -> PathBuf {
    with_suffix(store, "log")
}

/// Append an internal log line (one JSON object per line).
pub fn ttlog(store: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(store))?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;

    Ok(())
}

/// All log entries in write order. Unreadable lines are skipped.
pub fn read_log(store: &Path) -> AppResult<Vec<LogEntry>> {
    let content = match fs::read_to_string(log_path(store)) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| match serde_json::from_str(l) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed log line");
                None
            }
        })
        .collect())
}
