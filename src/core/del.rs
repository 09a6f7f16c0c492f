use crate::core::log::audit;
use crate::errors::AppResult;
use crate::store::RecordStore;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the record for `date`. Returns false when there was none;
    /// deleting twice is not an error.
    pub fn apply(store: &RecordStore, date: NaiveDate) -> AppResult<bool> {
        let deleted = store.delete(date)?;

        if deleted {
            audit(store.path(), "del", &date.to_string(), "Record deleted");
        }

        Ok(deleted)
    }
}
