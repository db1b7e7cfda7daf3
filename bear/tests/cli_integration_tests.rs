//! Integration tests for the bear binary
//!
//! These tests run the built `bear` executable inside scratch project
//! directories. Environment creation is exercised with a stand-in
//! interpreter script, so no real Python is needed. Tests run serially
//! because they write executable scripts and spawn processes.

use serial_test::serial;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bear(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bear"))
        .args(["--no-config", "--no-color"])
        .args(args)
        .current_dir(project)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bear")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
#[serial]
fn test_no_command_prints_usage() {
    let project = TempDir::new().unwrap();
    let output = bear(project.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("bear: no command specified"), "stdout: {}", out);
    assert!(out.contains("bear: available commands: venv, sync"));
}

#[test]
#[serial]
fn test_unknown_command_prints_usage() {
    let project = TempDir::new().unwrap();
    let output = bear(project.path(), &["install"]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("bear: unknown command: install"), "stdout: {}", out);
    assert!(out.contains("bear: available commands: venv, sync"));
}

#[test]
#[serial]
fn test_sync_without_venv_fails() {
    let project = TempDir::new().unwrap();
    std::fs::write(project.path().join("requirements.txt"), "requests\n").unwrap();

    let output = bear(project.path(), &["sync"]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("bear: installing requirements"));
    assert!(
        stderr(&output).contains("Installer not found"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(!project.path().join(".venv").exists());
}

#[test]
#[serial]
fn test_arguments_after_command_are_ignored() {
    let project = TempDir::new().unwrap();
    let output = bear(project.path(), &["nope", "extra"]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("bear: unknown command: nope"), "stdout: {}", out);
    assert!(out.contains("bear: available commands: venv, sync"));
}

#[test]
#[serial]
fn test_missing_project_directory_is_configuration_error() {
    let workspace = TempDir::new().unwrap();
    let output = bear(workspace.path(), &["-C", "missing", "venv"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Configuration error"), "stderr: {}", err);
    assert!(err.contains("does not exist"));
    assert!(!err.contains("Failed to run"));
    assert!(stdout(&output).is_empty());
}

#[test]
#[serial]
fn test_invalid_venv_dir_is_configuration_error() {
    let project = TempDir::new().unwrap();
    let output = bear(project.path(), &["--venv-dir", ".", "sync"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
}

#[test]
#[serial]
fn test_version_flag() {
    let project = TempDir::new().unwrap();
    let output = bear(project.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Interpreter stand-in: `-m venv <dir>` creates `<dir>/bin/pip`, which
    /// logs its arguments to `<dir>/pip-calls.log`.
    const FAKE_PYTHON: &str = r#"#!/bin/sh
[ "$1" = "-m" ] && [ "$2" = "venv" ] || exit 64
mkdir -p "$3/bin"
cat > "$3/bin/pip" <<'PIP'
#!/bin/sh
echo "$@" >> "$(dirname "$0")/../pip-calls.log"
PIP
chmod 755 "$3/bin/pip"
"#;

    fn write_fake_python(dir: &Path) -> PathBuf {
        let path = dir.join("fake-python");
        fs::write(&path, FAKE_PYTHON).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn pip_calls(venv: &Path) -> Vec<String> {
        fs::read_to_string(venv.join("pip-calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    #[serial]
    fn test_venv_then_sync() {
        let project = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let python = write_fake_python(tools.path());
        let python = python.to_str().unwrap();

        let output = bear(project.path(), &["--python", python, "venv"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));

        let out = stdout(&output);
        assert!(out.contains("bear: created virtual environment at .venv"));
        assert!(out.contains("bear: installed requirements"));
        assert!(out.contains("source .venv/bin/activate"));
        assert!(out.contains(".venv/Scripts/activate.bat"));
        assert!(out.contains("./.venv/Scripts/activate.ps1"));
        assert!(project.path().join(".venv").is_dir());

        let output = bear(project.path(), &["sync"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));

        assert_eq!(
            pip_calls(&project.path().join(".venv")),
            vec!["install -r requirements.txt", "install -r requirements.txt"]
        );
    }

    #[test]
    #[serial]
    fn test_project_config_file_is_used() {
        let project = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let python = write_fake_python(tools.path());
        fs::write(
            project.path().join("bear.toml"),
            format!(
                "venv_dir = \"env\"\nrequirements = \"dev.txt\"\npython = \"{}\"\n",
                python.display()
            ),
        )
        .unwrap();

        // Config files are loaded here, so keep the user config out of reach
        let home = TempDir::new().unwrap();
        let output = Command::new(env!("CARGO_BIN_EXE_bear"))
            .args(["--no-color", "venv"])
            .current_dir(project.path())
            .env("HOME", home.path())
            .env("XDG_CONFIG_HOME", home.path().join(".config"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap();
        assert!(output.status.success(), "stderr: {}", stderr(&output));

        assert!(stdout(&output).contains("created virtual environment at env"));
        assert_eq!(
            pip_calls(&project.path().join("env")),
            vec!["install -r dev.txt"]
        );
    }

    #[test]
    #[serial]
    fn test_sync_with_extra_arguments() {
        let project = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let python = write_fake_python(tools.path());

        let output = bear(
            project.path(),
            &["--python", python.to_str().unwrap(), "venv", "again"],
        );
        assert!(output.status.success(), "stderr: {}", stderr(&output));

        let output = bear(project.path(), &["sync", "extra"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).contains("bear: done"));

        assert_eq!(
            pip_calls(&project.path().join(".venv")),
            vec!["install -r requirements.txt", "install -r requirements.txt"]
        );
    }

    #[test]
    #[serial]
    fn test_directory_flag() {
        let workspace = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let python = write_fake_python(tools.path());
        fs::create_dir(workspace.path().join("app")).unwrap();

        let output = bear(
            workspace.path(),
            &["-C", "app", "--python", python.to_str().unwrap(), "venv"],
        );
        assert!(output.status.success(), "stderr: {}", stderr(&output));

        assert!(workspace.path().join("app/.venv").is_dir());
        assert!(!workspace.path().join(".venv").exists());
    }

    #[test]
    #[serial]
    fn test_failing_installer_exits_nonzero() {
        let project = TempDir::new().unwrap();
        let bin = project.path().join(".venv/bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("pip"), "#!/bin/sh\nexit 2\n").unwrap();
        fs::set_permissions(bin.join("pip"), fs::Permissions::from_mode(0o755)).unwrap();

        let output = bear(project.path(), &["sync"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Installer exited with"));
        assert!(!stdout(&output).contains("bear: done"));
    }
}
