use crate::errors::AppResult;
use crate::store::log::{read_log, ttlog};
use crate::ui::messages::warning;
use crate::utils::colors::no_color;
use ansi_term::Colour;
use std::path::Path;

const OP_TARGET_MAX: usize = 40;

/// Write an audit line; a failure is reported but never aborts the caller.
pub(crate) fn audit(store: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

/// Colour of an operation name in `log --print`.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Path) -> AppResult<()> {
        let entries = read_log(store)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(25);

        println!("📜 Internal log:\n");

        for (i, entry) in entries.iter().enumerate() {
            let color = color_for_operation(&entry.operation);

            let visible = if entry.target.is_empty() {
                entry.operation.clone()
            } else {
                format!("{} ({})", entry.operation, entry.target)
            };
            let padding = " ".repeat(OP_TARGET_MAX.saturating_sub(visible.chars().count()));

            // only the operation column is coloured
            let colored = match visible.split_once(' ') {
                _ if no_color() => visible.clone(),
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.date,
                colored,
                padding,
                entry.message,
            );
        }

        Ok(())
    }
}
