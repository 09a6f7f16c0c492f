use crate::cli::commands::{calculator, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calendar::HolidayCalendar;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{color_for_residual, paint};
use crate::utils::date;
use crate::utils::formatting::format_duration;

/// Compute and store a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, entry, exit } = cmd {
        //
        // 1. Parse date (default = today)
        //
        let d = match date {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        //
        // 2. Build engine from config
        //
        let calc = calculator(cfg)?;
        let calendar = HolidayCalendar::from_config(cfg)?;
        let store = open_store(cfg);

        //
        // 3. Execute logic
        //
        let outcome = AddLogic::apply(&store, &calc, &calendar, d, entry, exit)?;

        if !outcome.working_day {
            warning(format!(
                "{} is a Saturday, Sunday or public holiday: the record is stored but not counted in summaries.",
                d
            ));
        }
        if outcome.replaced {
            info(format!("Existing record for {} replaced.", d));
        }

        success(format!(
            "{} ({}) saved: worked {} | residual {}",
            d,
            outcome.record.weekday,
            format_duration(outcome.worked),
            paint(
                color_for_residual(outcome.residual),
                &format_duration(outcome.residual)
            )
        ));
    }

    Ok(())
}
