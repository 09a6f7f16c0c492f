use super::{HolidayProvider, HolidaySet};
use chrono::{Days, NaiveDate};

/// National public holidays of Italy.
#[derive(Debug, Default)]
pub struct ItalianHolidays;

const FIXED: [(u32, u32); 10] = [
    (1, 1),   // Capodanno
    (1, 6),   // Epifania
    (4, 25),  // Liberazione
    (5, 1),   // Festa del lavoro
    (6, 2),   // Festa della Repubblica
    (8, 15),  // Ferragosto
    (11, 1),  // Ognissanti
    (12, 8),  // Immacolata
    (12, 25), // Natale
    (12, 26), // Santo Stefano
];

impl HolidayProvider for ItalianHolidays {
    fn region(&self) -> &str {
        "IT"
    }

    fn holidays(&self, year: i32) -> HolidaySet {
        let mut set: HolidaySet = FIXED
            .iter()
            .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(year, m, d))
            .collect();

        if let Some(easter) = easter_sunday(year) {
            set.insert(easter);
            if let Some(monday) = easter.checked_add_days(Days::new(1)) {
                set.insert(monday);
            }
        }

        set
    }
}

/// Gregorian Easter Sunday (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
