mod common;
use common::date;
use rshiftlog::config::Config;
use rshiftlog::core::calendar::{
    ExtraHolidays, HolidayCalendar, HolidayProvider, HolidaySet, ItalianHolidays, NoHolidays,
    easter_sunday, provider_for_region,
};

fn italy() -> HolidayCalendar {
    HolidayCalendar::new(Box::new(ItalianHolidays))
}

#[test]
fn test_weekends_are_not_working_days() {
    let cal = italy();
    assert!(!cal.is_working_day(date("2024-03-16"))); // Saturday
    assert!(!cal.is_working_day(date("2024-03-17"))); // Sunday
    assert!(cal.is_working_day(date("2024-03-15"))); // Friday
    assert!(cal.is_working_day(date("2024-03-18"))); // Monday
}

#[test]
fn test_italian_fixed_holidays() {
    let cal = italy();
    for d in [
        "2025-01-01",
        "2025-01-06",
        "2024-04-25",
        "2024-05-01",
        "2025-06-02",
        "2024-08-15",
        "2024-11-01",
        "2025-12-08",
        "2024-12-25",
        "2024-12-26",
    ] {
        assert!(!cal.is_working_day(date(d)), "{d} should be a holiday");
    }
}

#[test]
fn test_easter_monday_moves_every_year() {
    assert_eq!(easter_sunday(2024), Some(date("2024-03-31")));
    assert_eq!(easter_sunday(2025), Some(date("2025-04-20")));
    assert_eq!(easter_sunday(2026), Some(date("2026-04-05")));

    let cal = italy();
    assert!(!cal.is_working_day(date("2024-04-01")));
    assert!(!cal.is_working_day(date("2025-04-21")));
    assert!(!cal.is_working_day(date("2026-04-06")));
    // the Monday after Easter Monday is ordinary
    assert!(cal.is_working_day(date("2024-04-08")));
}

#[test]
fn test_holidays_are_computed_for_the_date_year() {
    let cal = italy();
    // same calendar answers for several years
    assert!(!cal.is_working_day(date("2023-12-25")));
    assert!(!cal.is_working_day(date("2027-12-08")));
    assert!(cal.is_working_day(date("2027-12-09")));
}

#[test]
fn test_no_holidays_provider_only_skips_weekends() {
    let cal = HolidayCalendar::new(Box::new(NoHolidays));
    assert!(cal.is_working_day(date("2024-12-25")));
    assert!(!cal.is_working_day(date("2024-12-28")));
    assert_eq!(cal.region(), "NONE");
}

#[test]
fn test_extra_holidays_are_date_specific() {
    let provider = ExtraHolidays::new(Box::new(ItalianHolidays), vec![date("2024-06-24")]);
    let cal = HolidayCalendar::new(Box::new(provider));

    assert!(!cal.is_working_day(date("2024-06-24")));
    assert!(cal.is_working_day(date("2025-06-24")));
    assert!(!cal.is_working_day(date("2024-12-25")));
    assert_eq!(cal.region(), "IT");
}

struct OnlyNewYear;

impl HolidayProvider for OnlyNewYear {
    fn region(&self) -> &str {
        "TEST"
    }

    fn holidays(&self, year: i32) -> HolidaySet {
        chrono::NaiveDate::from_ymd_opt(year, 1, 1).into_iter().collect()
    }
}

#[test]
fn test_custom_provider_is_pluggable() {
    let cal = HolidayCalendar::new(Box::new(OnlyNewYear));
    assert!(!cal.is_working_day(date("2024-01-01")));
    assert!(cal.is_working_day(date("2024-12-25")));
}

#[test]
fn test_region_lookup() {
    assert_eq!(provider_for_region("it").unwrap().region(), "IT");
    assert_eq!(provider_for_region("NONE").unwrap().region(), "NONE");
    assert!(provider_for_region("XX").is_err());
}

#[test]
fn test_calendar_from_config() {
    let cfg = Config {
        extra_holidays: vec!["2024-06-24".into()],
        ..Config::default()
    };
    let cal = HolidayCalendar::from_config(&cfg).expect("calendar");
    assert!(!cal.is_working_day(date("2024-06-24")));
    assert!(!cal.is_working_day(date("2024-04-25")));

    let bad = Config {
        extra_holidays: vec!["24/06/2024".into()],
        ..Config::default()
    };
    assert!(HolidayCalendar::from_config(&bad).is_err());
}
