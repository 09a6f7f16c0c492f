use chrono::NaiveDate;
use serde::Serialize;

/// Residual totals relative to a reference date, in minutes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub week: i64,
    pub month: i64,
    pub year: i64,
}

/// One working day in a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub worked: i64,
    pub residual: i64,
}
