//! YAML configuration for the tinsel card.
//!
//! Looked up at `$XDG_CONFIG_HOME/tinsel/config.yaml`, then
//! `$HOME/.config/tinsel/config.yaml`. Every field is optional.

use crate::countdown::fixed_offset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reference canvas height.
pub const DEFAULT_ROWS: u16 = 20;
/// Reference canvas width.
pub const DEFAULT_COLS: u16 = 70;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File is not valid YAML for this schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// Values parsed but make no sense together.
    #[error("{0}")]
    Invalid(String),
}

/// Card configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TinselConfig {
    /// Canvas height in rows.
    pub rows: u16,
    /// Canvas width in columns.
    pub cols: u16,
    /// Frames per second.
    pub fps: u32,
    /// Whole-hour UTC offset the countdown is measured in.
    pub timezone_offset_hours: i32,
    /// Triangle height of the tree.
    pub tree_height: u16,
    /// Ornaments hung on the tree each frame.
    pub ornaments: usize,
    /// Fixed ornament seed; unset means a new seed every run.
    pub seed: Option<u64>,
    /// Key that quits the card.
    pub quit_key: char,
}

impl Default for TinselConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            fps: 5,
            // EST
            timezone_offset_hours: -5,
            tree_height: 15,
            ornaments: 9,
            seed: None,
            quit_key: 'q',
        }
    }
}

impl TinselConfig {
    /// Candidate config paths, most specific first.
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("tinsel/config.yaml"));
        }

        if let Ok(home) = std::env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/tinsel/config.yaml"));
        }

        paths
    }

    /// Load the first config file found, falling back to defaults.
    ///
    /// A file that exists but cannot be used is reported and skipped.
    pub fn load() -> Self {
        for path in Self::config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("config: loaded {}", path.display());
                    return config;
                }
                Err(err) => log::warn!("config: ignoring {}: {err}", path.display()),
            }
        }
        log::debug!("config: no config file found, using defaults");
        Self::default()
    }

    /// Load and validate a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate YAML. An empty document yields the defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be at least 1x1 (got {}x{})",
                self.rows, self.cols
            )));
        }
        if self.tree_height > self.rows {
            return Err(ConfigError::Invalid(format!(
                "tree_height {} does not fit in {} rows",
                self.tree_height, self.rows
            )));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".to_string()));
        }
        if fixed_offset(self.timezone_offset_hours).is_err() {
            return Err(ConfigError::Invalid(format!(
                "timezone_offset_hours must be within -23..=23 (got {})",
                self.timezone_offset_hours
            )));
        }
        Ok(())
    }

    /// Default configuration as commented YAML.
    pub fn default_yaml() -> String {
        let defaults = Self::default();
        format!(
            r"# tinsel configuration
# Location: ~/.config/tinsel/config.yaml

# Canvas size
rows: {rows}
cols: {cols}

# Animation speed
fps: {fps}

# Countdown timezone as whole hours from UTC (-5 = EST)
timezone_offset_hours: {tz}

# Tree
tree_height: {height}
ornaments: {ornaments}

# Fix the ornament seed for a repeatable card
# seed: 42

quit_key: {quit}
",
            rows = defaults.rows,
            cols = defaults.cols,
            fps = defaults.fps,
            tz = defaults.timezone_offset_hours,
            height = defaults.tree_height,
            ornaments = defaults.ornaments,
            quit = defaults.quit_key,
        )
    }
}
