//! ANSI styling for classified scrollback lines
//!
//! Maps each [`LineKind`] to an SGR sequence so the binary can render the
//! scrollback with the CRT palette: bright echo, dim green responses, red
//! errors, cyan system messages.

use crate::models::{LineKind, TerminalLine};

/// SGR reset
pub const RESET: &str = "\x1b[0m";

/// Clear screen and home the cursor (used by the CLEAR command)
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// SGR prefix for a line kind
pub fn style_for(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Command => "\x1b[1;37m",
        LineKind::Response => "\x1b[32m",
        LineKind::Error => "\x1b[1;31m",
        LineKind::System => "\x1b[1;36m",
    }
}

/// Render a scrollback line, optionally styled
///
/// Multi-line text keeps the style across rows; the reset trails the
/// whole block.
pub fn paint(line: &TerminalLine, color: bool) -> String {
    if color {
        format!("{}{}{}", style_for(line.kind), line.text, RESET)
    } else {
        line.text.clone()
    }
}
