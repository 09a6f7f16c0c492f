// src/export/target.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use std::path::Path;

/// Make sure the export may be written to `path`.
///
/// A missing file is always fine. An existing one is replaced only with
/// `force` or after the user agrees; a directory is never a valid target.
pub(crate) fn claim_target(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "{} is a directory, not a file",
            path.display()
        )));
    }
    if !path.exists() {
        return Ok(());
    }
    if force {
        info(format!("Replacing {}", path.display()));
        return Ok(());
    }

    if confirm(&format!("{} already exists. Replace it?", path.display())) {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "kept the existing {}, nothing exported",
            path.display()
        )))
    }
}
