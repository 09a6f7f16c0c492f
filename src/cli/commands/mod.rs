pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::config::Config;
use crate::core::calculator::ShiftCalculator;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::ui::prompt::confirm;

/// Store configured for this run.
pub(crate) fn open_store(cfg: &Config) -> RecordStore {
    RecordStore::open(cfg.store_path())
}

pub(crate) fn calculator(cfg: &Config) -> AppResult<ShiftCalculator> {
    Ok(ShiftCalculator::new(cfg.standard_shift_minutes()?))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    confirm("Confirm")
}
