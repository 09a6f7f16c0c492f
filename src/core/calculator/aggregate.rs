//! Residual totals over week/month/year and the per-day chart series.

use crate::core::calendar::HolidayCalendar;
use crate::models::{DailyPoint, DailyRecord, Summary};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::warn;

/// Iterate the working-day records with their parsed date, in key order.
/// Keys that are not ISO dates are skipped.
fn working_days<'a>(
    records: &'a BTreeMap<String, DailyRecord>,
    calendar: &'a HolidayCalendar,
) -> impl Iterator<Item = (NaiveDate, &'a DailyRecord)> + 'a {
    records.iter().filter_map(move |(key, rec)| {
        let date = match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                warn!(key = %key, "skipping record with invalid date key");
                return None;
            }
        };
        calendar.is_working_day(date).then_some((date, rec))
    })
}

/// Sum residuals of working days that share the ISO week, the month, and
/// the year of `reference`.
pub fn summarize(
    records: &BTreeMap<String, DailyRecord>,
    reference: NaiveDate,
    calendar: &HolidayCalendar,
) -> Summary {
    let ref_week = reference.iso_week();
    let mut summary = Summary::default();

    for (date, rec) in working_days(records, calendar) {
        let residual = match rec.residual_minutes() {
            Ok(m) => m,
            Err(e) => {
                warn!(date = %date, error = %e, "skipping record with unreadable residual");
                continue;
            }
        };

        let week = date.iso_week();
        if week.week() == ref_week.week() && week.year() == ref_week.year() {
            summary.week = summary.week.saturating_add(residual);
        }
        if date.month() == reference.month() && date.year() == reference.year() {
            summary.month = summary.month.saturating_add(residual);
        }
        if date.year() == reference.year() {
            summary.year = summary.year.saturating_add(residual);
        }
    }

    summary
}

/// Worked and residual minutes for each working day in `[from, to]`
/// (whole collection when `bounds` is `None`), ordered by date.
pub fn daily_series(
    records: &BTreeMap<String, DailyRecord>,
    bounds: Option<(NaiveDate, NaiveDate)>,
    calendar: &HolidayCalendar,
) -> Vec<DailyPoint> {
    working_days(records, calendar)
        .filter(|(date, _)| bounds.is_none_or(|(from, to)| *date >= from && *date <= to))
        .filter_map(|(date, rec)| {
            match (rec.worked_minutes(), rec.residual_minutes()) {
                (Ok(worked), Ok(residual)) => Some(DailyPoint {
                    date,
                    worked,
                    residual,
                }),
                _ => {
                    warn!(date = %date, "skipping record with unreadable durations");
                    None
                }
            }
        })
        .collect()
}
