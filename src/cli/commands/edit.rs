use crate::cli::commands::{calculator, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { date, entry, exit } = cmd {
        let d = date::parse_date(date)?;

        let calc = calculator(cfg)?;
        let store = open_store(cfg);

        let updated = EditLogic::apply(&store, &calc, d, entry.as_deref(), exit.as_deref())?;

        success(format!(
            "{} updated: {}-{} worked {} | residual {}",
            d, updated.entry, updated.exit, updated.worked, updated.residual
        ));
    }

    Ok(())
}
