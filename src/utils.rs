//! Utility functions for terminal output formatting
//!
//! This module provides consistent, colored output functions for narrating
//! the setup run. Progress goes to stdout, errors and warnings to stderr.

use colored::*;

use crate::constants::{ICON_ERROR, ICON_INFO, ICON_STEP, ICON_SUCCESS, ICON_WARNING};

/// Prints the header line of a setup step
///
/// # Example
///
/// ```no_run
/// use project_tools::utils::print_step;
///
/// print_step("Configuring Prettier...");
/// ```
pub fn print_step(message: &str) {
    println!("{} {}", ICON_STEP.bright_cyan().bold(), message.bold());
}

/// Displays a success message with a green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", ICON_SUCCESS.green(), message);
}

/// Displays an informational message for steps that had nothing to do
pub fn print_info(message: &str) {
    println!("{} {}", ICON_INFO.bright_blue(), message);
}

/// Displays a warning on stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", ICON_WARNING.yellow(), message.yellow());
}

/// Displays an error message with a red X mark on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", ICON_ERROR.red(), message);
}

/// Replaces the `{}` placeholder of a message template
pub fn fill(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}
