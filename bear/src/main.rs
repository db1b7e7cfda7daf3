//! bear CLI
//!
//! `bear venv` creates `.venv` and installs `requirements.txt` into it;
//! `bear sync` reinstalls the requirements into an existing environment.

use anyhow::{Context, Result};
use bear::bootstrap::Bootstrapper;
use bear::cli::{dispatch, Cli};
use bear::config::{resolve_project_dir, BootstrapConfig};
use bear::report::Reporter;
use clap::Parser;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose);

    // Build configuration using priority chain: defaults → user file → project file → CLI args
    let (project_dir, config) = match build_config(&cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            if cli.verbose {
                eprintln!("Error details: {:?}", e);
            }
            std::process::exit(1);
        }
    };

    tracing::debug!("Project directory: {}", project_dir.display());
    tracing::debug!("Virtual environment: {}", config.venv_dir.display());
    tracing::debug!("Requirements file: {}", config.requirements.display());
    tracing::debug!("Python interpreter: {}", config.python);

    let bootstrapper = Bootstrapper::new(project_dir, config);
    let mut reporter = Reporter::stdout();

    let args: Vec<String> = cli.command.iter().chain(&cli.rest).cloned().collect();

    let code = match dispatch(&args, &bootstrapper, &mut reporter) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if cli.verbose {
                eprintln!("Error details: {:?}", e);
            }
            std::process::exit(1);
        }
    };

    std::process::exit(code);
}

fn build_config(cli: &Cli) -> Result<(PathBuf, BootstrapConfig)> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let project_dir = resolve_project_dir(&cwd, cli.directory.as_deref())?;
    let config = build_bootstrap_config(cli, &project_dir)?;
    Ok((project_dir, config))
}

fn build_bootstrap_config(cli: &Cli, project_dir: &Path) -> Result<BootstrapConfig> {
    let mut builder = BootstrapConfig::builder().with_config_files(
        project_dir,
        cli.config.as_deref(),
        !cli.no_config,
    )?;

    // Apply CLI argument overrides (highest priority)
    if let Some(ref dir) = cli.venv_dir {
        builder = builder.with_venv_dir(dir)?;
    }
    if let Some(ref requirements) = cli.requirements {
        builder = builder.with_requirements(requirements)?;
    }
    if let Some(ref python) = cli.python {
        builder = builder.with_python(python)?;
    }

    builder.build()
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
