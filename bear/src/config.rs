//! Bootstrap configuration
//!
//! Resolves the settings a run needs from defaults, config files and CLI flags.

use anyhow::{Context, Result};
use bear_core::config::project_config_path;
use bear_core::{
    default_user_config_path, BearConfig, Platform, DEFAULT_REQUIREMENTS, DEFAULT_VENV_DIR,
};
use std::path::{Component, Path, PathBuf};

/// Resolve the project directory from the working directory and `-C`
///
/// The result must be an existing directory.
pub fn resolve_project_dir(cwd: &Path, directory: Option<&Path>) -> Result<PathBuf> {
    let project_dir = match directory {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };

    if !project_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Project directory {} does not exist or is not a directory",
            project_dir.display()
        ));
    }

    Ok(project_dir)
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Virtual environment location, relative to the project directory
    pub venv_dir: PathBuf,

    /// Requirements file, relative to the project directory
    pub requirements: PathBuf,

    /// Interpreter used to create the virtual environment
    pub python: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            venv_dir: PathBuf::from(DEFAULT_VENV_DIR),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            python: Platform::current().default_python().to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for bootstrap configuration with validation and priority chain support
///
/// Priority chain (lowest to highest):
/// 1. Defaults
/// 2. User config file
/// 3. Project config file (or `--config`)
/// 4. CLI arguments
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    venv_dir: Option<PathBuf>,
    requirements: Option<PathBuf>,
    python: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set virtual environment directory (with validation)
    pub fn with_venv_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        Self::validate_venv_dir(&dir)?;
        self.venv_dir = Some(dir);
        Ok(self)
    }

    /// Set requirements file (with validation)
    pub fn with_requirements(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::validate_requirements(&path)?;
        self.requirements = Some(path);
        Ok(self)
    }

    /// Set interpreter (with validation)
    pub fn with_python(mut self, python: impl Into<String>) -> Result<Self> {
        let python = python.into();
        Self::validate_python(&python)?;
        self.python = Some(python);
        Ok(self)
    }

    /// Apply one configuration layer; values present in the layer replace current ones
    pub fn with_layer(self, layer: BearConfig) -> Result<Self> {
        let mut builder = self;
        if let Some(dir) = layer.venv_dir {
            builder = builder.with_venv_dir(dir)?;
        }
        if let Some(path) = layer.requirements {
            builder = builder.with_requirements(path)?;
        }
        if let Some(python) = layer.python {
            builder = builder.with_python(python)?;
        }
        Ok(builder)
    }

    /// Load the user and project configuration files
    ///
    /// `explicit` replaces the project file and must exist. Missing user or
    /// project files are skipped.
    pub fn with_config_files(
        self,
        project_dir: &Path,
        explicit: Option<&Path>,
        load_files: bool,
    ) -> Result<Self> {
        if !load_files {
            return Ok(self);
        }

        let mut layer = BearConfig::default();

        if let Some(user_path) = default_user_config_path() {
            if let Some(user) = BearConfig::load_if_exists(&user_path)? {
                tracing::debug!("Loaded user config from {}", user_path.display());
                layer = layer.merge(user);
            }
        }

        match explicit {
            Some(path) => {
                let project = BearConfig::load(path)
                    .with_context(|| format!("Cannot load config file {}", path.display()))?;
                tracing::debug!("Loaded config from {}", path.display());
                layer = layer.merge(project);
            }
            None => {
                let project_path = project_config_path(project_dir);
                if let Some(project) = BearConfig::load_if_exists(&project_path)? {
                    tracing::debug!("Loaded project config from {}", project_path.display());
                    layer = layer.merge(project);
                }
            }
        }

        self.with_layer(layer)
    }

    /// Build the final configuration with validation
    pub fn build(self) -> Result<BootstrapConfig> {
        let defaults = BootstrapConfig::default();

        let venv_dir = self.venv_dir.unwrap_or(defaults.venv_dir);
        let requirements = self.requirements.unwrap_or(defaults.requirements);
        let python = self.python.unwrap_or(defaults.python);

        // Validate final values
        Self::validate_venv_dir(&venv_dir)?;
        Self::validate_requirements(&requirements)?;
        Self::validate_python(&python)?;

        Ok(BootstrapConfig {
            venv_dir,
            requirements,
            python,
        })
    }

    /// Validate virtual environment directory
    fn validate_venv_dir(dir: &Path) -> Result<()> {
        if dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!(
                "Virtual environment directory cannot be empty"
            ));
        }

        // Never let the environment land on top of the project itself
        if dir.components().all(|c| matches!(c, Component::CurDir)) {
            return Err(anyhow::anyhow!(
                "Virtual environment directory cannot be the project directory"
            ));
        }

        Ok(())
    }

    /// Validate requirements file path
    fn validate_requirements(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("Requirements file cannot be empty"));
        }

        Ok(())
    }

    /// Validate interpreter name
    fn validate_python(python: &str) -> Result<()> {
        if python.trim().is_empty() {
            return Err(anyhow::anyhow!("Python interpreter cannot be empty"));
        }

        Ok(())
    }
}
