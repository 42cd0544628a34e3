pub mod parser;
pub mod validation;

use std::path::Path;

use anyhow::Result;

pub use parser::{default_config_path, load_config, parse_config, LauncherConfig, CONFIG_FILE};

/// Resolve the config for a launch.
///
/// An explicit path must exist. Without one, `launcher.yaml` next to the
/// launcher is used when present, otherwise built-in defaults.
pub fn resolve(script_dir: &Path, explicit: Option<&Path>) -> Result<LauncherConfig> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => {
            let path = default_config_path(script_dir);
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading launcher config");
                load_config(&path)?
            } else {
                LauncherConfig::default()
            }
        }
    };
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &LauncherConfig) -> Result<()> {
    validation::validate_config(config)
}
