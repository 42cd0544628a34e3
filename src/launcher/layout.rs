use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::LauncherConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaunchError {
    #[error("{dir_name} directory not found!")]
    MissingProjectRoot { dir_name: String, path: PathBuf },
    #[error("{file_name} not found in {dir_name} directory!")]
    MissingEntryFile { file_name: String, dir_name: String },
    #[error("{file_name} not found in {dir_name} directory!")]
    MissingRequirementsFile { file_name: String, dir_name: String },
}

impl LaunchError {
    /// Remediation printed under the diagnostic, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LaunchError::MissingProjectRoot { .. } => {
                Some("Please ensure you're running this from the correct location.")
            }
            LaunchError::MissingEntryFile { .. } | LaunchError::MissingRequirementsFile { .. } => {
                None
            }
        }
    }
}

/// Paths the launcher works with, all derived from its own location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_root: PathBuf,
    pub entry_file: PathBuf,
    pub requirements_file: PathBuf,
    dir_name: String,
    entry_name: String,
    requirements_name: String,
}

impl ProjectLayout {
    pub fn new(script_dir: &Path, config: &LauncherConfig) -> Self {
        let project_root = script_dir.join(&config.project_dir);
        Self {
            entry_file: project_root.join(&config.entry),
            requirements_file: project_root.join(&config.requirements),
            project_root,
            dir_name: config.project_dir.clone(),
            entry_name: config.entry.clone(),
            requirements_name: config.requirements.clone(),
        }
    }

    /// Existence checks, in order. Stops at the first missing path.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if !self.project_root.exists() {
            return Err(LaunchError::MissingProjectRoot {
                dir_name: self.dir_name.clone(),
                path: self.project_root.clone(),
            });
        }
        if !self.entry_file.exists() {
            return Err(LaunchError::MissingEntryFile {
                file_name: self.entry_name.clone(),
                dir_name: self.dir_name.clone(),
            });
        }
        if !self.requirements_file.exists() {
            return Err(LaunchError::MissingRequirementsFile {
                file_name: self.requirements_name.clone(),
                dir_name: self.dir_name.clone(),
            });
        }
        Ok(())
    }

    /// Install command shown when the application fails to run.
    pub fn install_hint(&self) -> String {
        format!(
            "pip install -r {}/{}",
            self.dir_name, self.requirements_name
        )
    }
}

/// Directory holding the launcher as it was invoked.
///
/// Symlinks are not followed: a launcher linked into another directory looks
/// for the project next to the link. Bare command names found through `PATH`
/// fall back to the resolved executable.
pub fn script_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let invoked = std::env::args_os().next().map(PathBuf::from);
    let exe = match invoked.and_then(|argv0| invocation_path(&argv0, &cwd)) {
        Some(path) => path,
        None => std::env::current_exe().context("Failed to locate launcher binary")?,
    };
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", exe.display()))
}

/// Absolute path for an `argv[0]` that names a file, `None` for a bare name.
pub fn invocation_path(argv0: &Path, cwd: &Path) -> Option<PathBuf> {
    if argv0.components().count() < 2 {
        return None;
    }
    Some(cwd.join(argv0))
}
