//! Grid configuration
//!
//! Tunables for `TerminalState`, loadable from a JSON file. Missing fields
//! take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TAB_WIDTH, DEFAULT_WIDTH};

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid width in columns
    pub width: usize,
    /// Distance between tab stops
    pub tab_width: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl GridConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded grid config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from the default location or return the default
    /// config. A file that exists but cannot be loaded is logged and skipped.
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/termgrid/config.json
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "ignoring config: {}", e)
                    }
                }
            }
        }
        Self::default()
    }

    /// Check that the grid dimensions are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.tab_width == 0 {
            return Err(ConfigError::InvalidTabWidth(self.tab_width));
        }
        Ok(())
    }
}

/// Get the default configuration file path
fn default_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("termgrid")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid grid width {0}: must be at least 1")]
    InvalidWidth(usize),
    #[error("invalid tab width {0}: must be at least 1")]
    InvalidTabWidth(usize),
}
