//! Output formatting for postman2jmx.
//!
//! The [`Printer`] controls whether messages are emitted based on the
//! user's `--quiet` and `--verbose` flags. User-facing lines (the
//! confirmation line and environment warnings) go to stdout; diagnostics
//! go to stderr. Errors are always printed regardless of quiet mode.

use anstream::{eprintln, println};
use owo_colors::OwoColorize;

/// Controls output formatting for postman2jmx.
#[derive(Copy, Clone)]
pub struct Printer {
    /// Verbosity level: 0 = normal, 1+ = verbose.
    verbosity: u8,
    /// Whether output is suppressed.
    quiet: bool,
}

impl Printer {
    /// Create a new printer with the given verbosity and quiet settings.
    pub fn new(verbosity: u8, quiet: bool) -> Self {
        Self { verbosity, quiet }
    }

    /// Print a user-facing message to stdout.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print an error message to stderr.
    ///
    /// Errors are always printed, even in quiet mode, because suppressing
    /// error output would hide actionable failures from the user.
    pub fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }

    /// Print a debug message to stderr (only at verbosity >= 1).
    pub fn debug(&self, message: &str) {
        if self.verbosity >= 1 && !self.quiet {
            eprintln!("{}: {}", "debug".dimmed(), message);
        }
    }
}
