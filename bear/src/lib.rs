//! bear Library
//!
//! Creates a Python virtual environment and installs a requirements file
//! into it, by running the interpreter's `venv` module and the environment's
//! own `pip`.
//!
//! ```no_run
//! use bear::bootstrap::Bootstrapper;
//! use bear::config::BootstrapConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BootstrapConfig::builder().with_venv_dir("env")?.build()?;
//! let bootstrapper = Bootstrapper::new(std::env::current_dir()?, config);
//!
//! bootstrapper.create_venv()?;
//! bootstrapper.install_requirements()?;
//! # Ok(())
//! # }
//! ```

/// Environment creation and requirement installation.
pub mod bootstrap;

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// Configuration resolution for a run.
pub mod config;

/// Prefixed status line output.
pub mod report;

#[cfg(all(test, unix))]
pub mod test_utils;
