//! Virtual environment layout
//!
//! A virtual environment keeps its executables in `bin/` on Unix-like systems
//! and in `Scripts/` on Windows. [`VenvLayout`] answers where things live
//! inside an environment for a given [`Platform`].

use std::path::PathBuf;

/// Operating system family, as far as virtual environment layout is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux, macOS and other Unix-like systems
    Unix,
    /// Windows
    Windows,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Interpreter used to create environments when none is configured.
    pub fn default_python(self) -> &'static str {
        match self {
            Platform::Unix => "python3",
            Platform::Windows => "python",
        }
    }

    /// Directory inside the environment that holds executables.
    pub fn scripts_dir(self) -> &'static str {
        match self {
            Platform::Unix => "bin",
            Platform::Windows => "Scripts",
        }
    }

    /// File name of the package installer.
    pub fn installer_name(self) -> &'static str {
        match self {
            Platform::Unix => "pip",
            Platform::Windows => "pip.exe",
        }
    }
}

/// Shell-specific instruction for activating an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Human label, e.g. `linux (bash)`
    pub shell: &'static str,
    /// Command the user types
    pub command: String,
}

/// Locations inside one virtual environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvLayout {
    root: PathBuf,
    platform: Platform,
}

impl VenvLayout {
    /// Layout of the environment at `root` for `platform`.
    pub fn new(root: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            root: root.into(),
            platform,
        }
    }

    /// Layout of the environment at `root` for the current platform.
    pub fn for_current_platform(root: impl Into<PathBuf>) -> Self {
        Self::new(root, Platform::current())
    }

    /// Path of the package installer inside the environment.
    pub fn installer_path(&self) -> PathBuf {
        self.root
            .join(self.platform.scripts_dir())
            .join(self.platform.installer_name())
    }

    /// Activation commands for bash, cmd and PowerShell.
    ///
    /// All three are listed regardless of the current platform, since a
    /// project directory is often shared between systems.
    pub fn activation_instructions(&self) -> Vec<Activation> {
        let root = self.root.display();
        vec![
            Activation {
                shell: "linux (bash)",
                command: format!("source {}/bin/activate", root),
            },
            Activation {
                shell: "windows (cmd)",
                command: format!("{}/Scripts/activate.bat", root),
            },
            Activation {
                shell: "windows (powershell)",
                command: format!("./{}/Scripts/activate.ps1", root),
            },
        ]
    }
}
