//! Environment bootstrapper
//!
//! Creates the virtual environment with the Python `venv` module and installs
//! the requirements file into it with the environment's own `pip`. Both steps
//! block until the child process exits; child stdio is inherited.

use bear_core::{BearError, Result, VenvLayout};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::config::BootstrapConfig;

/// Arguments passed to the installer for a requirements file.
pub fn installer_args(requirements: &Path) -> Vec<OsString> {
    vec![
        OsString::from("install"),
        OsString::from("-r"),
        requirements.as_os_str().to_owned(),
    ]
}

/// Runs environment creation and requirement installation for one project
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    project_dir: PathBuf,
    config: BootstrapConfig,
    layout: VenvLayout,
}

impl Bootstrapper {
    /// Bootstrapper for the project rooted at `project_dir`.
    ///
    /// `project_dir` should be absolute; every relative path in `config` is
    /// resolved against it and child processes run inside it.
    pub fn new(project_dir: impl Into<PathBuf>, config: BootstrapConfig) -> Self {
        let layout = VenvLayout::for_current_platform(&config.venv_dir);
        Self {
            project_dir: project_dir.into(),
            config,
            layout,
        }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Layout of the environment, relative to the project directory.
    pub fn layout(&self) -> &VenvLayout {
        &self.layout
    }

    /// Create the virtual environment by running `<python> -m venv <venv_dir>`.
    pub fn create_venv(&self) -> Result<()> {
        let python = &self.config.python;
        let mut command = Command::new(python);
        command
            .arg("-m")
            .arg("venv")
            .arg(&self.config.venv_dir)
            .current_dir(&self.project_dir);

        debug!("Running {:?} in {}", command, self.project_dir.display());

        let status = command.status().map_err(|source| BearError::Spawn {
            program: python.clone(),
            source,
        })?;

        if !status.success() {
            return Err(BearError::VenvCreation {
                python: python.clone(),
                reason: status.to_string(),
            });
        }

        info!(
            "Created virtual environment at {}",
            self.project_dir.join(&self.config.venv_dir).display()
        );
        Ok(())
    }

    /// Install the requirements file with the environment's installer.
    pub fn install_requirements(&self) -> Result<()> {
        let relative = self.layout.installer_path();
        let installer = self.project_dir.join(&relative);

        if !installer.is_file() {
            return Err(BearError::InstallerNotFound(relative));
        }

        let mut command = Command::new(&installer);
        command
            .args(installer_args(&self.config.requirements))
            .current_dir(&self.project_dir);

        debug!("Running {:?} in {}", command, self.project_dir.display());

        let status = command.status().map_err(|source| BearError::Spawn {
            program: installer.display().to_string(),
            source,
        })?;

        if !status.success() {
            return Err(BearError::InstallFailed { status });
        }

        Ok(())
    }
}
