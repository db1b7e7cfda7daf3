//! Configuration file model for bear
//!
//! Configuration is read from up to two TOML files:
//! - the user file (`~/.config/bear/config.toml`), see [`default_user_config_path`]
//! - the project file ([`PROJECT_CONFIG_FILE`] in the project directory)
//!
//! Every field is optional. Values from a later layer replace values from an
//! earlier one; see [`BearConfig::merge`].

mod paths;

pub use paths::{default_user_config_path, project_config_path};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BearError, Result};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "bear.toml";

/// One layer of bear configuration as it appears on disk.
///
/// ```toml
/// venv_dir = ".venv"
/// requirements = "requirements.txt"
/// python = "python3.11"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BearConfig {
    /// Virtual environment location, relative to the project directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venv_dir: Option<PathBuf>,

    /// Requirements file, relative to the project directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<PathBuf>,

    /// Interpreter used to create the virtual environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}

impl BearConfig {
    /// Load a configuration layer from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BearError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            BearError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load a configuration layer from `path`, returning `None` if the file does not exist.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if path.is_file() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse a configuration layer from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: BearConfig) -> BearConfig {
        BearConfig {
            venv_dir: other.venv_dir.or(self.venv_dir),
            requirements: other.requirements.or(self.requirements),
            python: other.python.or(self.python),
        }
    }
}
