//! Working-day calendar: weekends plus a pluggable set of public holidays.

mod italy;

pub use italy::{ItalianHolidays, easter_sunday};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

/// Public holidays of one year.
pub type HolidaySet = BTreeSet<NaiveDate>;

/// Source of public holidays for a region.
pub trait HolidayProvider {
    /// Short region code, e.g. `IT`.
    fn region(&self) -> &str;

    /// All holidays falling in `year`.
    fn holidays(&self, year: i32) -> HolidaySet;
}

/// Weekends only.
#[derive(Debug, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn region(&self) -> &str {
        "NONE"
    }

    fn holidays(&self, _year: i32) -> HolidaySet {
        HolidaySet::new()
    }
}

/// Another provider plus fixed extra dates (company closures, patron saints).
pub struct ExtraHolidays {
    inner: Box<dyn HolidayProvider>,
    extra: Vec<NaiveDate>,
}

impl ExtraHolidays {
    pub fn new(inner: Box<dyn HolidayProvider>, extra: Vec<NaiveDate>) -> Self {
        Self { inner, extra }
    }
}

impl HolidayProvider for ExtraHolidays {
    fn region(&self) -> &str {
        self.inner.region()
    }

    fn holidays(&self, year: i32) -> HolidaySet {
        let mut set = self.inner.holidays(year);
        set.extend(self.extra.iter().filter(|d| d.year() == year));
        set
    }
}

/// Map a configured region code to its provider.
pub fn provider_for_region(code: &str) -> AppResult<Box<dyn HolidayProvider>> {
    match code.trim().to_uppercase().as_str() {
        "IT" => Ok(Box::new(ItalianHolidays)),
        "NONE" | "" => Ok(Box::new(NoHolidays)),
        other => Err(AppError::Config(format!(
            "Unknown holiday region '{other}' (supported: IT, NONE)"
        ))),
    }
}

pub struct HolidayCalendar {
    provider: Box<dyn HolidayProvider>,
    cache: RefCell<HashMap<i32, HolidaySet>>,
}

impl HolidayCalendar {
    pub fn new(provider: Box<dyn HolidayProvider>) -> Self {
        Self {
            provider,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Calendar for the configured region and extra holidays.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let base = provider_for_region(&cfg.holiday_region)?;
        let extra = cfg.extra_holiday_dates()?;

        if extra.is_empty() {
            Ok(Self::new(base))
        } else {
            Ok(Self::new(Box::new(ExtraHolidays::new(base, extra))))
        }
    }

    pub fn region(&self) -> &str {
        self.provider.region()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        let mut cache = self.cache.borrow_mut();
        cache
            .entry(date.year())
            .or_insert_with(|| self.provider.holidays(date.year()))
            .contains(&date)
    }

    /// False on Saturday, Sunday and on public holidays of the date's year.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }
}
