//! Configuration management for Relayterm
//!
//! TOML configuration loaded from standard locations with built-in
//! defaults as fallback. Every field is optional in the file; missing
//! sections fall back to their defaults.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Relayterm
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content API configuration
    pub content: ContentConfig,

    /// Terminal shell configuration
    pub terminal: TerminalConfig,

    /// UI configuration
    pub ui: UiConfig,
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Base URL of the content API
    pub api_url: String,

    /// Timeout for the startup content fetch, in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

/// Terminal shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt prefix shown ahead of echoed commands
    pub prompt: String,

    /// Startup banner seeded into the scrollback
    pub banner: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: crate::shell::DEFAULT_PROMPT.to_string(),
            banner: crate::shell::DEFAULT_BANNER.to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Render scrollback lines with ANSI colors
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
