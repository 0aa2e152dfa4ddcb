//! Relayterm - a retro relay-station portfolio terminal
//!
//! This library implements the command-driven shell behind the Meridian
//! relay console: a free-text terminal that navigates between portfolio
//! sections, keeps a classified scrollback, records command history, and
//! merges admin-authored custom pages fetched from a content API.
//!
//! ## Module Organization
//!
//! - [`shell`] - Command interpreter, navigation state machine, history
//! - [`content`] - Custom-page directory and content API client
//! - [`models`] - Data structures (Section, CustomPage, TerminalLine)
//! - [`config`] - TOML configuration loading with fallback defaults
//! - [`ansi`] - ANSI styling for classified scrollback lines
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use relayterm::TerminalShell;
//!
//! let mut shell = TerminalShell::with_defaults();
//! shell.execute_command("HELP");
//! assert_eq!(shell.section().id(), "home");
//! ```
//!
//! ## Architecture
//!
//! All shell state lives in a single [`shell::TerminalShell`] value owned
//! by the host's event loop; command execution is serialized, so no two
//! invocations can interleave scrollback mutations. The only asynchronous
//! operation is the one-time custom-page fetch at startup, delivered over
//! a `tokio::mpsc` channel and merged between commands. Until it arrives
//! the page directory reports `NotLoaded` and dynamic-page navigation
//! silently fails, degrading to the six static sections.

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod shell;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader};
pub use content::{ContentClient, PageDirectory};
pub use error::{Error, Result};
pub use models::{CustomPage, LineKind, Section, TerminalLine};
pub use shell::{SectionView, TerminalShell};

/// The current version of Relayterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize Relayterm with configuration from default locations
///
/// Loads configuration from the default search paths, falling back to
/// built-in defaults when no file is found or loading fails, and builds
/// the terminal shell from it.
///
/// # Examples
///
/// ```no_run
/// let (config, shell) = relayterm::init().expect("init failed");
/// assert!(!config.terminal.prompt.is_empty());
/// assert!(!shell.scrollback().is_empty());
/// ```
pub fn init() -> Result<(Config, TerminalShell)> {
    info!("initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => {
            info!("configuration loaded");
            config
        }
        Err(e) => {
            warn!("failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    let shell = TerminalShell::from_config(&config);
    Ok((config, shell))
}
