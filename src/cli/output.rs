//! Output formatting for CLI commands

use serde::Serialize;

pub use crate::storage::OutputFormat;
use crate::scaffold::{Action, FileChange};

/// Output helper for consistent formatting
///
/// In text mode, status lines carry the markers `✓` (done), `✗` (failed),
/// `!` (warning) and `i` (informational). In JSON mode, status lines are
/// suppressed and each command prints a single JSON document via
/// [`Output::data`]; warnings and errors go to stderr as JSON objects.
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a plain line (text only)
    pub fn line(&self, message: &str) {
        if self.is_text() {
            println!("{}", message);
        }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        if self.is_text() {
            println!("✓ {}", message);
        }
    }

    /// Prints an informational message
    pub fn info(&self, message: &str) {
        if self.is_text() {
            println!("i {}", message);
        }
    }

    /// Prints a warning
    pub fn warn(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("! {}", message),
            OutputFormat::Json => {
                eprintln!("{}", serde_json::json!({ "warning": message }));
            }
        }
    }

    /// Prints a failure that does not abort the command
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("✗ {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Reports what happened to a scaffolded file
    pub fn change(&self, change: &FileChange) {
        match change.action {
            Action::Created | Action::Updated => self.success(&change.describe()),
            Action::Skipped => self.info(&change.describe()),
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                // Text callers print their own layout; this is a fallback
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a blank line (text only)
    pub fn blank(&self) {
        if self.is_text() {
            println!();
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if using text format
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
