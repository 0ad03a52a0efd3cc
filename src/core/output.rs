//! Unified output formatting utilities for consistent CLI presentation.
//!
//! The default command writes exactly one line to stdout, so anything that
//! is not the status line goes to stderr there. The interactive commands
//! (`noti`, `cache compact`) print human-readable reports to stdout.

use colored::*;

/// Print an error message to stderr, keeping stdout clean for the status line
///
/// # Format
/// ```text
/// ✕ <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕".red(), message);
}

/// Prints a section header followed by an underline of the same width
///
/// # Format
/// ```text
/// 🔔 GitHub Notifications
/// =======================
/// ```
pub fn print_section_header(header: &str) {
    println!("{}", header.bold());
    println!("{}", "=".repeat(header.chars().count()));
}

/// Formats and prints a success message with a green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✅".green(), message);
}

/// Formats and prints a failure report with a red cross
pub fn print_failure(message: &str) {
    println!("{} {}", "❌".red(), message);
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{message}");
}
