use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Resolve `program` the way a spawn would: paths as given, bare names
/// through `PATH`. Only executable files count.
pub fn find_command(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

pub fn command_available(program: &str) -> bool {
    find_command(program).is_some()
}

/// Whether `runtime -c "import <module>"` succeeds.
pub fn module_importable(runtime: &str, module: &str, cwd: &Path) -> bool {
    Command::new(runtime)
        .arg("-c")
        .arg(format!("import {}", module))
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
