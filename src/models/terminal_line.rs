//! Terminal Line Model
//!
//! A single classified line of the scrollback. Lines are append-only and
//! owned exclusively by the shell; the view layer renders them read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a scrollback line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of user input, prompt-prefixed
    Command,
    /// Output of a recognized command
    Response,
    /// Unrecognized-command report
    Error,
    /// Console-originated message (startup banner)
    System,
}

/// A single line of terminal scrollback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalLine {
    /// Line classification, drives styling in the view layer
    pub kind: LineKind,

    /// The text content; may span multiple display rows via `\n`
    pub text: String,

    /// When this line was appended
    pub timestamp: DateTime<Utc>,
}

impl TerminalLine {
    /// Create a new line of the given kind
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Command-echo line
    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }

    /// Response line
    pub fn response(text: impl Into<String>) -> Self {
        Self::new(LineKind::Response, text)
    }

    /// Error line
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    /// System line
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, text)
    }
}
