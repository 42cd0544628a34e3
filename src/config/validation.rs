use std::path::{Component, Path};

use anyhow::{bail, Result};

use super::parser::LauncherConfig;

pub fn validate_config(config: &LauncherConfig) -> Result<()> {
    for (field, value) in [
        ("app_name", &config.app_name),
        ("project_dir", &config.project_dir),
        ("runtime", &config.runtime),
        ("module", &config.module),
        ("entry", &config.entry),
        ("requirements", &config.requirements),
    ] {
        if value.trim().is_empty() {
            bail!("{} must not be empty", field);
        }
    }

    for (field, value) in [("entry", &config.entry), ("requirements", &config.requirements)] {
        if !is_bare_file_name(value) {
            bail!("{} must be a file name inside project_dir, got '{}'", field, value);
        }
    }

    Ok(())
}

fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
