//! Progress and diagnostic logging
//!
//! All log lines go to stderr so that `--json` output on stdout stays
//! machine-readable.

use colored::*;

/// Logger with consistent formatting
///
/// Each message is prefixed with its scope (an account or repository name)
/// in cyan/bold. Info and success lines are only printed in verbose mode;
/// warnings and errors always are.
///
/// ## Example
///
/// ```rust
/// use langstats::logger::Logger;
///
/// let logger = Logger::new(true);
/// logger.info("octocat", "Fetching repositories");
/// logger.warn("hello-world", "Language fetch failed");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, scope: &str, msg: &str) {
        if self.verbose {
            eprintln!("{} | {}", scope.cyan().bold(), msg);
        }
    }

    pub fn success(&self, scope: &str, msg: &str) {
        if self.verbose {
            eprintln!("{} | {}", scope.cyan().bold(), msg.green());
        }
    }

    pub fn warn(&self, scope: &str, msg: &str) {
        eprintln!("{} | {}", scope.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, scope: &str, msg: &str) {
        eprintln!("{} | {}", scope.cyan().bold(), msg.red());
    }
}
