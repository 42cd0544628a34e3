use std::path::Path;

use anyhow::Result;

use crate::config::LauncherConfig;
use crate::launcher::ProjectLayout;
use crate::utils::shell;

/// Report problems that would stop a launch, without starting anything.
pub fn run(script_dir: &Path, config: &LauncherConfig) -> Result<()> {
    let issues = collect_issues(script_dir, config);

    if issues.is_empty() {
        println!("Launcher check: no issues found");
        return Ok(());
    }

    println!("Launcher check found {} issue(s):", issues.len());
    for issue in &issues {
        println!("- {}", issue);
    }
    anyhow::bail!("{} issue(s) found", issues.len())
}

pub fn collect_issues(script_dir: &Path, config: &LauncherConfig) -> Vec<String> {
    let layout = ProjectLayout::new(script_dir, config);
    let mut issues = Vec::new();

    if !layout.project_root.exists() {
        issues.push(format!(
            "Missing project directory: {}",
            layout.project_root.display()
        ));
    } else {
        if !layout.entry_file.exists() {
            issues.push(format!("Missing entry file: {}", layout.entry_file.display()));
        }
        if !layout.requirements_file.exists() {
            issues.push(format!(
                "Missing requirements file: {}",
                layout.requirements_file.display()
            ));
        }
    }

    if !shell::command_available(&config.runtime) {
        issues.push(format!("Missing runtime command: {}", config.runtime));
    } else if layout.project_root.is_dir()
        && !shell::module_importable(&config.runtime, &config.module, &layout.project_root)
    {
        issues.push(format!(
            "Module '{}' is not importable with {} (try: {})",
            config.module,
            config.runtime,
            layout.install_hint()
        ));
    }

    issues
}
