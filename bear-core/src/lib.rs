//! bear Core Library
//!
//! Shared types, configuration, and virtual environment layout for the bear
//! environment bootstrapper. The `bear` CLI crate builds on top of this.

pub mod config;
pub mod error;
pub mod venv;

// Re-export commonly used types
pub use config::{default_user_config_path, BearConfig, PROJECT_CONFIG_FILE};
pub use error::*;
pub use venv::{Platform, VenvLayout};

/// Default location of the virtual environment, relative to the project directory.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Default requirements file, relative to the project directory.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";
