//! TOML configuration: where the input files live and whether to validate.
//!
//! ```toml
//! synsets = "data/synsets.txt"
//! hypernyms = "data/hypernyms.txt"
//! validate = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Result type for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

fn default_synsets() -> PathBuf {
    PathBuf::from("synsets.txt")
}

fn default_hypernyms() -> PathBuf {
    PathBuf::from("hypernyms.txt")
}

fn default_validate() -> bool {
    true
}

/// Input locations and build options for a [`WordNet`](crate::wordnet::WordNet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetConfig {
    /// Path to the synsets file.
    #[serde(default = "default_synsets")]
    pub synsets: PathBuf,
    /// Path to the hypernyms file.
    #[serde(default = "default_hypernyms")]
    pub hypernyms: PathBuf,
    /// Reject hypernym graphs that are cyclic or not single-rooted.
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            synsets: default_synsets(),
            hypernyms: default_hypernyms(),
            validate: default_validate(),
        }
    }
}

impl WordNetConfig {
    /// Config pointing at the given files, other fields default.
    pub fn with_files(synsets: impl Into<PathBuf>, hypernyms: impl Into<PathBuf>) -> Self {
        Self {
            synsets: synsets.into(),
            hypernyms: hypernyms.into(),
            ..Default::default()
        }
    }

    /// Load from a TOML file.
    ///
    /// Relative input paths are resolved against the config file's directory.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(base) = path.parent() {
            config.synsets = base.join(&config.synsets);
            config.hypernyms = base.join(&config.hypernyms);
        }
        Ok(config)
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
