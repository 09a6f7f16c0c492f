use crate::core::calculator::ShiftCalculator;
use crate::core::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::DailyRecord;
use crate::store::RecordStore;
use chrono::NaiveDate;

/// Business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Replace entry and/or exit of an existing record and recompute the
    /// derived durations. An omitted time keeps the stored value; omitting
    /// both is a `Usage` error.
    ///
    /// The stored record is left as it was on any error.
    pub fn apply(
        store: &RecordStore,
        calculator: &ShiftCalculator,
        date: NaiveDate,
        entry: Option<&str>,
        exit: Option<&str>,
    ) -> AppResult<DailyRecord> {
        if entry.is_none() && exit.is_none() {
            return Err(AppError::Usage(
                "nothing to edit, pass --in and/or --out".into(),
            ));
        }

        let current = store
            .get(date)?
            .ok_or_else(|| AppError::NotFound(date.to_string()))?;

        let new_entry = entry.unwrap_or(current.entry.as_str());
        let new_exit = exit.unwrap_or(current.exit.as_str());

        let shift = calculator.compute(new_entry, new_exit)?;
        let updated = DailyRecord::new(date, &shift);

        store.upsert(date, updated.clone())?;

        audit(
            store.path(),
            "edit",
            &date.to_string(),
            &format!(
                "{}-{} -> {}-{}",
                current.entry, current.exit, updated.entry, updated.exit
            ),
        );

        Ok(updated)
    }
}
