use crate::core::calculator::{daily_series, summarize};
use crate::core::calendar::HolidayCalendar;
use crate::errors::AppResult;
use crate::models::{DailyPoint, Summary};
use crate::store::RecordStore;
use chrono::NaiveDate;

pub struct SummaryLogic;

impl SummaryLogic {
    /// Week/month/year residual totals relative to `reference`.
    pub fn totals(
        store: &RecordStore,
        calendar: &HolidayCalendar,
        reference: NaiveDate,
    ) -> AppResult<Summary> {
        let records = store.load_all()?;
        Ok(summarize(&records, reference, calendar))
    }

    /// Working-day series for the chart, optionally bounded.
    pub fn series(
        store: &RecordStore,
        calendar: &HolidayCalendar,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<DailyPoint>> {
        let records = store.load_all()?;
        Ok(daily_series(&records, bounds, calendar))
    }
}
