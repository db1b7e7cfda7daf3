//! CLI argument definitions and the command registry

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::bootstrap::Bootstrapper;
use crate::report::Reporter;

use super::handlers::{handle_sync, handle_venv};

/// Process exit status for a successful command.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for a usage error.
pub const EXIT_FAILURE: i32 = 1;

/// Create a Python virtual environment and install requirements into it
#[derive(Parser, Debug)]
#[command(name = "bear")]
#[command(version, about = "Create a virtual environment and install requirements", long_about = None)]
pub struct Cli {
    /// Command to run: venv or sync
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Arguments after the command; accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,

    /// Virtual environment directory, relative to the project (default: .venv)
    #[arg(long, value_name = "PATH")]
    pub venv_dir: Option<PathBuf>,

    /// Requirements file, relative to the project (default: requirements.txt)
    #[arg(short, long, value_name = "PATH")]
    pub requirements: Option<PathBuf>,

    /// Python interpreter used to create the environment
    #[arg(long, value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Run as if started in this directory
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Config file path (default: bear.toml in the project directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Don't load config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// A registered command; returns the process exit status
pub type Action = fn(&Bootstrapper, &mut Reporter) -> Result<i32>;

/// Every command bear understands, in the order they are listed to the user
pub const COMMANDS: &[(&str, Action)] = &[("venv", handle_venv), ("sync", handle_sync)];

/// Look up a registered command by name
pub fn find_command(name: &str) -> Option<Action> {
    COMMANDS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, action)| *action)
}

/// Names of all registered commands, in registry order
pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}
