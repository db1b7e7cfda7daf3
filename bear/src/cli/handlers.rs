//! Command execution handlers

use anyhow::{Context, Result};

use crate::bootstrap::Bootstrapper;
use crate::report::Reporter;

use super::commands::{command_names, find_command, EXIT_FAILURE, EXIT_SUCCESS};

/// Run the command named by the first of `args`, or report a usage error
///
/// Arguments after the command name are ignored. Returns the exit status of
/// the selected command, or [`EXIT_FAILURE`] when no command or an unknown
/// command is given. Failures inside a command are returned as errors.
pub fn dispatch(
    args: &[String],
    bootstrapper: &Bootstrapper,
    reporter: &mut Reporter,
) -> Result<i32> {
    let Some((name, rest)) = args.split_first() else {
        reporter.log("no command specified");
        show_available_commands(reporter);
        return Ok(EXIT_FAILURE);
    };

    let Some(action) = find_command(name) else {
        reporter.log(format!("unknown command: {}", name));
        show_available_commands(reporter);
        return Ok(EXIT_FAILURE);
    };

    if !rest.is_empty() {
        tracing::debug!("Ignoring arguments after '{}': {:?}", name, rest);
    }
    tracing::debug!("Dispatching command '{}'", name);
    action(bootstrapper, reporter)
}

fn show_available_commands(reporter: &mut Reporter) {
    reporter.log(format!("available commands: {}", command_names().join(", ")));
}

/// Handle venv command
pub fn handle_venv(bootstrapper: &Bootstrapper, reporter: &mut Reporter) -> Result<i32> {
    let venv_dir = bootstrapper.config().venv_dir.display().to_string();

    reporter.log("creating virtual environment");
    bootstrapper
        .create_venv()
        .context("Cannot create virtual environment")?;
    reporter.log(format!("created virtual environment at {}", venv_dir));
    reporter.blank();

    handle_sync(bootstrapper, reporter)?;

    reporter.log("activate the virtual environment with:");
    for activation in bootstrapper.layout().activation_instructions() {
        reporter.log(format!("  {}: {}", activation.shell, activation.command));
    }
    reporter.blank();

    reporter.log("done");
    Ok(EXIT_SUCCESS)
}

/// Handle sync command
pub fn handle_sync(bootstrapper: &Bootstrapper, reporter: &mut Reporter) -> Result<i32> {
    install(bootstrapper, reporter)?;

    reporter.log("done");
    Ok(EXIT_SUCCESS)
}

fn install(bootstrapper: &Bootstrapper, reporter: &mut Reporter) -> Result<()> {
    reporter.log("installing requirements");
    bootstrapper.install_requirements().with_context(|| {
        format!(
            "Cannot install {}",
            bootstrapper.config().requirements.display()
        )
    })?;
    reporter.log("installed requirements");
    reporter.blank();
    Ok(())
}
