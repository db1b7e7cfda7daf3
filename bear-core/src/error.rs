//! Error types for bear

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Core error type for bear operations
#[derive(Error, Debug)]
pub enum BearError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The interpreter could not create the virtual environment
    #[error("Failed to create virtual environment with {python}: {reason}")]
    VenvCreation { python: String, reason: String },

    /// The installer is not present inside the virtual environment
    #[error("Installer not found at {} (run `bear venv` first)", .0.display())]
    InstallerNotFound(PathBuf),

    /// The installer ran but exited unsuccessfully
    #[error("Installer exited with {status}")]
    InstallFailed { status: ExitStatus },

    /// An external program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Parsing errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for bear operations
pub type Result<T> = std::result::Result<T, BearError>;

impl From<toml::de::Error> for BearError {
    fn from(err: toml::de::Error) -> Self {
        BearError::Parse(err.to_string())
    }
}
