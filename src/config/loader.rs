//! Configuration file loading
//!
//! Searches standard locations for a `config.toml`, falling back to
//! built-in defaults when none exists. Search order: the
//! `RELAYTERM_CONFIG` environment variable, the XDG config directory,
//! `~/.relayterm/config.toml`, then `./relayterm.toml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths, highest priority first
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::search_paths(),
        }
    }

    /// Load configuration from the first existing search path
    ///
    /// Returns the built-in defaults when no configuration file exists.
    /// A file that exists but fails to parse or validate is an error; the
    /// caller decides whether to fall back.
    pub fn load() -> Result<Config> {
        let loader = Self::new();
        for path in &loader.search_paths {
            if path.is_file() {
                debug!("loading configuration from {}", path.display());
                return Self::load_from_file(path);
            }
        }
        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&raw)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate loaded configuration values
    fn validate(config: &Config) -> Result<()> {
        if !config.content.api_url.starts_with("http://")
            && !config.content.api_url.starts_with("https://")
        {
            return Err(Error::ConfigValidationFailed {
                field: "content.api_url".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }
        if config.content.fetch_timeout_secs == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "content.fetch_timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if config.terminal.prompt.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.prompt".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Default search paths, highest priority first
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = env::var("RELAYTERM_CONFIG") {
            paths.push(PathBuf::from(path));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("relayterm").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".relayterm").join("config.toml"));
        }
        paths.push(PathBuf::from("relayterm.toml"));

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the first-visit marker gating the one-time tutorial overlay
pub fn visited_marker_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("relayterm").join("visited"))
}
