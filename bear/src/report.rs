//! Status line output
//!
//! Every user-facing line is printed as `bear: <message>` on stdout.

use colored::*;

/// Prefix put in front of every status line.
pub const PREFIX: &str = "bear";

/// Writes prefixed status lines, either to stdout or into memory
#[derive(Debug, Default)]
pub struct Reporter {
    captured: Option<Vec<String>>,
}

impl Reporter {
    /// Reporter printing to stdout
    pub fn stdout() -> Self {
        Self { captured: None }
    }

    /// Reporter collecting uncoloured lines in memory
    pub fn capturing() -> Self {
        Self {
            captured: Some(Vec::new()),
        }
    }

    /// Print one status line
    pub fn log(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        match &mut self.captured {
            Some(lines) => lines.push(format_line(message)),
            None => println!("{}: {}", PREFIX.cyan().bold(), message),
        }
    }

    /// Print an empty line between phases
    pub fn blank(&mut self) {
        match &mut self.captured {
            Some(lines) => lines.push(String::new()),
            None => println!(),
        }
    }

    /// Lines collected so far; empty for a stdout reporter
    pub fn lines(&self) -> &[String] {
        self.captured.as_deref().unwrap_or(&[])
    }
}

/// Format a status line without colour
pub fn format_line(message: &str) -> String {
    format!("{}: {}", PREFIX, message)
}
