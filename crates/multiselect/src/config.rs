//! Configuration for the selection manager.
//!
//! [`MultiSelectConfig`] can be built in code or loaded from TOML:
//!
//! ```toml
//! tap_outside_clears = true
//! long_press_selects = true
//! log_selection_changes = false
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::{Path, PathBuf};

use multiselect_core::logging::targets;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable behavior of a [`MultiSelectManager`](crate::manager::MultiSelectManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSelectConfig {
    /// A tap outside every item clears an active selection.
    pub tap_outside_clears: bool,

    /// A long-press toggles the pressed item, which is how selection mode is
    /// entered when nothing is selected yet.
    pub long_press_selects: bool,

    /// Log the complete selection at debug level after every toggle.
    pub log_selection_changes: bool,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            tap_outside_clears: true,
            long_press_selects: true,
            log_selection_changes: false,
        }
    }
}

impl MultiSelectConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Serializes the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Sets whether a tap outside every item clears the selection.
    pub fn with_tap_outside_clears(mut self, enabled: bool) -> Self {
        self.tap_outside_clears = enabled;
        self
    }

    /// Sets whether a long-press toggles the pressed item.
    pub fn with_long_press_selects(mut self, enabled: bool) -> Self {
        self.long_press_selects = enabled;
        self
    }

    /// Sets whether the selection is logged after every toggle.
    pub fn with_log_selection_changes(mut self, enabled: bool) -> Self {
        self.log_selection_changes = enabled;
        self
    }
}
