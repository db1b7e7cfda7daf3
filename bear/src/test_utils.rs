//! Test utilities for bootstrapper testing
//!
//! Writes small shell scripts that stand in for the Python interpreter and
//! for `pip`, so environment creation and installation can be exercised
//! without a real Python toolchain.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Name of the file the fake installer appends its arguments to
pub const PIP_CALLS_LOG: &str = "pip-calls.log";

fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn pip_script(exit_code: i32) -> String {
    format!(
        "#!/bin/sh\necho \"$@\" >> \"$(dirname \"$0\")/../{}\"\nexit {}\n",
        PIP_CALLS_LOG, exit_code
    )
}

/// Write a fake `pip` into `<project_dir>/<venv_dir>/bin/pip`
///
/// The script records each invocation's arguments on one line and exits with
/// `exit_code`.
pub fn fake_pip(project_dir: &Path, venv_dir: &Path, exit_code: i32) -> PathBuf {
    let path = project_dir.join(venv_dir).join("bin").join("pip");
    write_script(&path, &pip_script(exit_code));
    path
}

/// Write a fake interpreter into `dir`
///
/// It accepts only `-m venv <dir>` and creates `<dir>/bin/pip` as a fake
/// installer that succeeds.
pub fn fake_python(dir: &Path) -> PathBuf {
    let path = dir.join("fake-python");
    let body = format!(
        "#!/bin/sh\n\
         [ \"$1\" = \"-m\" ] && [ \"$2\" = \"venv\" ] || exit 64\n\
         mkdir -p \"$3/bin\"\n\
         cat > \"$3/bin/pip\" <<'PIP'\n\
         {}PIP\n\
         chmod 755 \"$3/bin/pip\"\n",
        pip_script(0)
    );
    write_script(&path, &body);
    path
}

/// Write an interpreter that always fails into `dir`
pub fn failing_python(dir: &Path) -> PathBuf {
    let path = dir.join("failing-python");
    write_script(&path, "#!/bin/sh\nexit 3\n");
    path
}

/// Arguments of every call made to a fake installer, one entry per call
pub fn pip_calls(project_dir: &Path, venv_dir: &Path) -> Vec<String> {
    fs::read_to_string(project_dir.join(venv_dir).join(PIP_CALLS_LOG))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
