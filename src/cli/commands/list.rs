use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, YELLOW, color_for_residual, colorize_optional, paint};
use crate::utils::date::{parse_date, parse_period};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let store = open_store(cfg);
        let calendar = HolidayCalendar::from_config(cfg)?;

        let bounds = match period.as_deref() {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        // snapshot: nothing here mutates the store
        let mut records = store.load_all()?;
        if let Some((from, to)) = bounds {
            let (from, to) = (from.to_string(), to.to_string());
            records.retain(|k, _| *k >= from && *k <= to);
        }

        match period.as_deref() {
            Some(p) => println!("📅 Saved records for {}:\n", p),
            None => println!("📅 Saved records:\n"),
        }

        if records.is_empty() {
            println!("⚠️  No recorded days found");
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::new("DATE", 10),
                Column::new("DAY", 10),
                Column::new("IN", 5),
                Column::new("OUT", 5),
                Column::new("WORKED", 8),
                Column::new("RESIDUAL", 9),
                Column::new("", 3),
            ],
            cfg.separator(),
        );
        let mut colored = Vec::new();

        for (key, rec) in &records {
            let working = parse_date(key)
                .map(|d| calendar.is_working_day(d))
                .unwrap_or(false);
            let marker = if working { "" } else { "🎉" };
            let residual_color = color_for_residual(rec.residual_minutes().unwrap_or(0));

            table.add_row(vec![
                key.clone(),
                rec.weekday.clone(),
                or_placeholder(&rec.entry),
                or_placeholder(&rec.exit),
                rec.worked.clone(),
                rec.residual.clone(),
                marker.to_string(),
            ]);

            let day = if working {
                rec.weekday.clone()
            } else {
                paint(GREY, &rec.weekday)
            };

            colored.push(vec![
                key.clone(),
                day,
                colorize_optional(&rec.entry),
                colorize_optional(&rec.exit),
                rec.worked.clone(),
                paint(residual_color, &rec.residual),
                paint(YELLOW, marker),
            ]);
        }

        print!("{}", table.render_colored(&colored));
        println!(
            "\n{} record(s). 🎉 = weekend or public holiday ({}), not counted in summaries.",
            bold(&records.len().to_string()),
            calendar.region()
        );
    }
    Ok(())
}

/// Plain-text twin of `colorize_optional`, used for column widths.
fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        "--:--".to_string()
    } else {
        value.to_string()
    }
}
