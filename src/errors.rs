//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Persistence(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid format: '{0}' (expected HH:MM)")]
    InvalidFormat(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Exit time {exit} must be later than entry time {entry}")]
    InvalidOrder { entry: String, exit: String },

    #[error("No record found for date {0}")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl AppError {
    /// True for the errors caused by what the user typed; the stored
    /// data is guaranteed untouched when one of these is returned.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidFormat(_)
                | AppError::InvalidOrder { .. }
                | AppError::InvalidDate(_)
                | AppError::Usage(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
