//! rShiftLog main entrypoint.

use rshiftlog::errors::AppError;
use rshiftlog::run;
use rshiftlog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        match &e {
            _ if e.is_validation() => {
                error(format!("Input rejected, nothing was saved: {}", e))
            }
            AppError::Persistence(_) => error(format!("Change discarded: {}", e)),
            _ => error(format!("Error: {}", e)),
        }
        std::process::exit(1);
    }
}
