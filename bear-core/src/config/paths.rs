//! Default path resolution for configuration files
//!
//! Uses XDG Base Directory specification when available.

use std::path::{Path, PathBuf};

use super::PROJECT_CONFIG_FILE;

/// Returns the default path for the user-level configuration file.
///
/// Uses the platform config directory:
/// - Linux: `~/.config/bear/config.toml`
/// - macOS: `~/Library/Application Support/bear/config.toml`
///
/// Returns `None` when no config directory can be determined.
pub fn default_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bear").join("config.toml"))
}

/// Returns the path of the project-level configuration file inside `project_dir`.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_CONFIG_FILE)
}
