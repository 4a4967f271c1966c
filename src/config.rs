//! Board configuration.
//!
//! Settings are read from TOML. Every key is optional:
//!
//! ```toml
//! recent_activity_limit = 5
//! seed_demo_data = true
//!
//! [limits]
//! title_max_chars = 100
//! description_max_chars = 500
//! name_max_chars = 50
//! ```

use crate::board::{domain::DEFAULT_RECENT_ACTIVITY_LIMIT, validation::ValidationLimits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of entries in the recent-activity feed. Values above
    /// [`DEFAULT_RECENT_ACTIVITY_LIMIT`] are capped by the service.
    pub recent_activity_limit: usize,
    /// Whether a new store starts with the demo team and tasks.
    pub seed_demo_data: bool,
    /// Field length limits enforced before input reaches the store.
    pub limits: ValidationLimits,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
            seed_demo_data: false,
            limits: ValidationLimits::default(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`BoardConfig`].
    #[error("invalid board config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl BoardConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or a
    /// key has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = std::fs::read_to_string(file).map_err(|source| ConfigError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
