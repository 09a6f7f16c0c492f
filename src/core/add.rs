use crate::core::calculator::ShiftCalculator;
use crate::core::calendar::HolidayCalendar;
use crate::core::log::audit;
use crate::errors::AppResult;
use crate::models::DailyRecord;
use crate::store::RecordStore;
use chrono::NaiveDate;

/// Result of a successful `add`.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub record: DailyRecord,
    pub worked: i64,
    pub residual: i64,
    /// False for weekends and holidays: the record is stored anyway but
    /// summaries ignore it.
    pub working_day: bool,
    /// True when a record for the same date was overwritten.
    pub replaced: bool,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Compute the day and store it, replacing any record for `date`.
    /// Nothing is written when the times are invalid.
    pub fn apply(
        store: &RecordStore,
        calculator: &ShiftCalculator,
        calendar: &HolidayCalendar,
        date: NaiveDate,
        entry: &str,
        exit: &str,
    ) -> AppResult<AddOutcome> {
        let shift = calculator.compute(entry, exit)?;
        let working_day = calendar.is_working_day(date);
        let record = DailyRecord::new(date, &shift);

        let replaced = store.get(date)?.is_some();
        store.upsert(date, record.clone())?;

        audit(
            store.path(),
            "add",
            &date.to_string(),
            &format!(
                "{}-{} worked {} residual {}",
                record.entry, record.exit, record.worked, record.residual
            ),
        );

        Ok(AddOutcome {
            record,
            worked: shift.worked,
            residual: shift.residual,
            working_day,
            replaced,
        })
    }
}
