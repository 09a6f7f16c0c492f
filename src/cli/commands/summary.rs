use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_residual, paint};
use crate::utils::date;
use crate::utils::formatting::{format_duration, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date: reference } = cmd {
        let reference = match reference {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let store = open_store(cfg);
        let calendar = HolidayCalendar::from_config(cfg)?;
        let totals = SummaryLogic::totals(&store, &calendar, reference)?;

        header(format!("Summary at {}", reference));

        for (label, value) in [
            ("Week:", totals.week),
            ("Month:", totals.month),
            ("Year:", totals.year),
        ] {
            println!(
                "{} {}",
                pad_right(label, 7),
                paint(color_for_residual(value), &format_duration(value))
            );
        }
    }
    Ok(())
}
