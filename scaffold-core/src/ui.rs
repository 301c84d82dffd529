//! Terminal output shared by both CLIs.

use colored::Colorize;

/// `-> message`, for pipeline stages.
pub fn step(message: &str) {
    println!("{} {}", "->".blue(), message);
}

/// Non-fatal failure after the tree is written.
pub fn warning(message: &str) {
    println!("{} {}", "Warning:".red(), message);
}

/// Two-column line for the "Available commands" style listings.
pub fn hint(command: &str, comment: &str) {
    println!("  {command:<22}{}", format!("# {comment}").cyan());
}

/// Fatal error line printed by the binaries before exiting with status 1.
pub fn error(err: &dyn std::error::Error) {
    eprintln!("{}", format!("Error: {err}").red());
}
