// mediatag-cli/src/output.rs
//
// Terminal output helpers. Results go to stdout, diagnostics to stderr.

use console::style;
use serde::Serialize;
use std::fmt::Display;

use crate::error::CliResult;

/// Print a result value on its own line
pub fn print_value<T: Display>(value: T) {
    println!("{value}");
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a successful batch entry
pub fn print_success(index: usize, message: &str) {
    println!("{} [{}] {}", style("✓").green().bold(), index, message);
}

/// Print a failed batch entry
pub fn print_failure(index: usize, message: &str) {
    println!("{} [{}] {}", style("✗").red().bold(), index, style(message).red());
}

/// Print a labelled summary line
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan(), value);
}

/// Print an error to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}
