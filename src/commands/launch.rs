use std::path::Path;

use anyhow::Result;

use crate::config::LauncherConfig;
use crate::launcher::{LaunchError, Launcher};

pub fn run(script_dir: &Path, config: LauncherConfig) -> Result<()> {
    let launcher = Launcher::new(script_dir, config);

    match launcher.run() {
        Ok(outcome) => {
            tracing::debug!(?outcome, "launcher finished");
            Ok(())
        }
        Err(err) => {
            if let LaunchError::MissingProjectRoot { path, .. } = &err {
                tracing::debug!(path = %path.display(), "project directory missing");
            }
            println!("❌ Error: {}", err);
            if let Some(hint) = err.hint() {
                println!("{}", hint);
            }
            std::process::exit(1);
        }
    }
}
