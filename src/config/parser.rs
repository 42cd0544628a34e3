use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const CONFIG_FILE: &str = "launcher.yaml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Name shown in the startup banner
    pub app_name: String,
    /// Directory next to the launcher that holds the application
    pub project_dir: String,
    /// Interpreter used to start the framework module
    pub runtime: String,
    /// Module passed to `-m`
    pub module: String,
    pub entry: String,
    pub requirements: String,
    /// Extra arguments appended after the entry file
    pub args: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: "Credit Risk Modeling Application".to_string(),
            project_dir: "project-root".to_string(),
            runtime: default_runtime().to_string(),
            module: "streamlit".to_string(),
            entry: "main.py".to_string(),
            requirements: "requirements.txt".to_string(),
            args: Vec::new(),
        }
    }
}

#[cfg(windows)]
fn default_runtime() -> &'static str {
    "python"
}

#[cfg(not(windows))]
fn default_runtime() -> &'static str {
    "python3"
}

pub fn load_config(path: &Path) -> Result<LauncherConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed reading config at {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed parsing YAML at {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }
    let config: LauncherConfig = serde_yaml::from_str(content)?;
    Ok(config)
}

/// Default config location: next to the launcher itself.
pub fn default_config_path(script_dir: &Path) -> PathBuf {
    script_dir.join(CONFIG_FILE)
}
