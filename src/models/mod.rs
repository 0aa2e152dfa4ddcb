//! Core data models for Relayterm
//!
//! This module contains the data structures that represent the domain
//! entities of the relay console: navigable sections, admin-authored
//! custom pages, and classified scrollback lines.

pub mod custom_page;
pub mod section;
pub mod terminal_line;

// Re-exports for convenience
pub use custom_page::CustomPage;
pub use section::{Section, STATIC_SECTIONS};
pub use terminal_line::{LineKind, TerminalLine};
