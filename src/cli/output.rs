//! Terminal output helpers
//!
//! Human-readable messages go through coloured helpers; `--json` switches
//! handlers to machine-readable output instead.

use crate::core::{Priority, Status};
use crate::error::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Formats command output for the terminal
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter, disabling colours globally when asked to
    #[must_use]
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color || json {
            colored::control::set_override(false);
        }
        Self { json }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "Error:".red().bold());
    }

    /// Print a value as pretty JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Priority name padded to `width`, coloured by urgency
#[must_use]
pub fn priority_label(priority: Option<Priority>, width: usize) -> ColoredString {
    let text = format!("{:<width$}", priority.map_or("-", |p| p.as_str()));
    match priority {
        Some(Priority::Critical) => text.purple().bold(),
        Some(Priority::High) => text.red(),
        Some(Priority::Medium) => text.yellow(),
        Some(Priority::Low) => text.green(),
        None => text.normal(),
    }
}

/// Status name padded to `width`, dimmed once the ticket is done
#[must_use]
pub fn status_label(status: Option<Status>, width: usize) -> ColoredString {
    let text = format!("{:<width$}", status.map_or("-", |s| s.as_str()));
    match status {
        Some(Status::Resolved | Status::Closed) => text.dimmed(),
        Some(Status::InProgress) => text.cyan(),
        _ => text.normal(),
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}
