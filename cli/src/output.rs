//! Terminal output utilities for styled CLI output.
//!
//! This module provides a consistent interface for printing styled output
//! to the terminal, replacing direct `println!` calls with structured output.

use console::{Term, style};
use std::fmt::Display;

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Output helper writing to stderr, for failures.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("⚠").yellow().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print an empty line.
    pub fn newline(&self) {
        drop(self.term.write_line(""));
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print the page summary under a table.
    pub fn footer(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).cyan().to_string()));
    }
}
