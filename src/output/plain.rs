//! Plain text output formatting.
//!
//! Produces human-readable lines with colors and formatting.

use console::style;
use std::io::{self, Write};

/// Write a success message.
pub fn write_success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("✓").green().bold(), msg)
}

/// Write an error message.
pub fn write_error(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("Error:").red().bold(), msg)
}

/// Write a warning message.
pub fn write_warning(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("Warning:").yellow().bold(), msg)
}

/// Write an info message.
pub fn write_info(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("ℹ").blue().bold(), msg)
}

/// Write a section heading followed by a rule.
pub fn write_heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(title).cyan().bold())?;
    writeln!(out, "{}", style("─".repeat(40)).dim())
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Format a money amount with its currency label.
pub fn format_amount(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{:.2} {}", value, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(40.0, "тг"), "40.00 тг");
        assert_eq!(format_amount(1.005, ""), "1.00");
    }

    #[test]
    fn test_write_success_contains_message() {
        let mut buf = Vec::new();
        write_success(&mut buf, "saved").unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("saved"));
    }
}
