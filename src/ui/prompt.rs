//! Yes/no questions on the terminal.

use std::io::{self, BufRead, Write};

/// Asks `question` on stdout and reads the answer from stdin.
/// Anything other than `y`/`yes` (or a read failure) is a no.
pub fn confirm(question: &str) -> bool {
    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), question)
}

/// Same as [`confirm`], reading the answer from `input`.
pub fn confirm_from<R: BufRead>(input: &mut R, question: &str) -> bool {
    print!("{question} [y/N]: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => is_yes(&line),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
