mod common;
use common::{date, records};
use rshiftlog::core::calculator::{daily_series, summarize};
use rshiftlog::core::calendar::{HolidayCalendar, ItalianHolidays};
use rshiftlog::models::{DailyRecord, Summary};
use rshiftlog::utils::format_duration;

fn italy() -> HolidayCalendar {
    HolidayCalendar::new(Box::new(ItalianHolidays))
}

#[test]
fn test_two_days_in_same_week() {
    let recs = records(&[
        ("2024-03-11", "09:00", "17:00"), // +18
        ("2024-03-12", "09:00", "16:00"), // -42
    ]);

    let s = summarize(&recs, date("2024-03-15"), &italy());
    assert_eq!(s.week, -24);
    assert_eq!(format_duration(s.week), "-0h 24m");
}

#[test]
fn test_week_month_year_windows_around_reference() {
    let recs = records(&[
        ("2024-03-11", "09:00", "17:00"), // +18, same ISO week
        ("2024-03-12", "09:00", "16:00"), // -42, same ISO week
        ("2024-03-16", "09:00", "18:00"), // Saturday, ignored
        ("2024-03-04", "08:00", "17:00"), // +78, previous week
        ("2024-02-05", "09:00", "17:42"), // +60, February
        ("2024-04-01", "08:00", "18:00"), // Easter Monday, ignored
        ("2023-03-13", "09:00", "17:00"), // ISO week 11 of 2023
    ]);

    let s = summarize(&recs, date("2024-03-15"), &italy());
    assert_eq!(
        s,
        Summary {
            week: -24,
            month: 54,
            year: 114,
        }
    );
}

#[test]
fn test_iso_week_crossing_new_year() {
    // 2024-12-30 belongs to ISO week 1 of 2025
    let recs = records(&[
        ("2024-12-27", "08:00", "18:00"), // +138, ISO week 52 of 2024
        ("2024-12-30", "09:00", "17:00"), // +18
        ("2025-01-02", "09:00", "16:00"), // -42
    ]);

    let s = summarize(&recs, date("2024-12-30"), &italy());
    assert_eq!(s.week, -24);
    assert_eq!(s.month, 156);
    assert_eq!(s.year, 156);
}

#[test]
fn test_huge_residuals_saturate_instead_of_overflowing() {
    let mut recs = records(&[]);
    for day in ["2024-03-11", "2024-03-12"] {
        recs.insert(
            day.into(),
            DailyRecord {
                residual: "150000000000000000h 0m".into(),
                ..DailyRecord::default()
            },
        );
    }

    let s = summarize(&recs, date("2024-03-15"), &italy());
    assert_eq!(s.week, i64::MAX);
    assert_eq!(s.month, i64::MAX);
    assert_eq!(s.year, i64::MAX);
}

#[test]
fn test_empty_store_sums_to_zero() {
    let recs = records(&[]);
    assert_eq!(summarize(&recs, date("2024-03-15"), &italy()), Summary::default());
}

#[test]
fn test_unreadable_residuals_and_keys_are_skipped() {
    let mut recs = records(&[("2024-03-11", "09:00", "17:00")]);
    recs.insert(
        "2024-03-12".into(),
        DailyRecord {
            residual: "lots".into(),
            ..DailyRecord::default()
        },
    );
    recs.insert("not-a-date".into(), DailyRecord::default());
    recs.insert("2024-03-13".into(), DailyRecord::default());

    let s = summarize(&recs, date("2024-03-15"), &italy());
    assert_eq!(s.week, 18);
}

#[test]
fn test_daily_series_is_ordered_and_bounded() {
    let recs = records(&[
        ("2024-03-12", "09:00", "16:00"),
        ("2024-03-11", "09:00", "17:00"),
        ("2024-03-16", "09:00", "18:00"), // Saturday
        ("2024-04-02", "09:00", "17:30"),
    ]);

    let all = daily_series(&recs, None, &italy());
    let dates: Vec<String> = all.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(dates, ["2024-03-11", "2024-03-12", "2024-04-02"]);
    assert_eq!(all[0].worked, 480);
    assert_eq!(all[1].residual, -42);

    let march = daily_series(
        &recs,
        Some((date("2024-03-01"), date("2024-03-31"))),
        &italy(),
    );
    assert_eq!(march.len(), 2);
}
