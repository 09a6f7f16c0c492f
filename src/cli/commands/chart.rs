use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::models::DailyPoint;
use crate::utils::colors::{CYAN, GREEN, RED, paint};
use crate::utils::date::parse_period;
use crate::utils::formatting::{format_duration, mins2hours, pad_left};

/// Half-width of the residual bar, in characters.
const BAR_WIDTH: usize = 20;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { period } = cmd {
        let bounds = match period.as_deref() {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        let store = open_store(cfg);
        let calendar = HolidayCalendar::from_config(cfg)?;
        let series = SummaryLogic::series(&store, &calendar, bounds)?;

        if series.is_empty() {
            println!("⚠️  No data available for charts.");
            return Ok(());
        }

        println!("📊 Worked hours and daily residuals\n");
        let scale = series.iter().map(|p| p.residual.abs()).max().unwrap_or(0);

        for point in &series {
            println!("{}", render_line(point, scale));
        }
    }
    Ok(())
}

/// Date, worked hours, then the residual as a bar left (negative) or
/// right (positive) of the `|` axis.
fn render_line(point: &DailyPoint, scale: i64) -> String {
    let len = if scale == 0 {
        0
    } else {
        ((point.residual.abs() * BAR_WIDTH as i64 + scale - 1) / scale) as usize
    };

    let (left, right) = if point.residual < 0 {
        (
            format!("{}{}", " ".repeat(BAR_WIDTH - len), paint(RED, &"█".repeat(len))),
            " ".repeat(BAR_WIDTH),
        )
    } else {
        (
            " ".repeat(BAR_WIDTH),
            format!("{}{}", paint(GREEN, &"█".repeat(len)), " ".repeat(BAR_WIDTH - len)),
        )
    };

    format!(
        "{}  {}  {}|{}  {}",
        point.date,
        paint(CYAN, &pad_left(&mins2hours(point.worked), 6)),
        left,
        right,
        format_duration(point.residual)
    )
}
