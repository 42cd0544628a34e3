pub mod layout;

use std::path::Path;

use crate::config::LauncherConfig;
use crate::process::{LaunchCommand, LaunchOutcome, ProcessRunner, SystemRunner};

pub use layout::{script_dir, LaunchError, ProjectLayout};

pub const SEPARATOR_WIDTH: usize = 50;

/// Validates the project next to the launcher and runs it through `R`.
pub struct Launcher<R = SystemRunner> {
    config: LauncherConfig,
    layout: ProjectLayout,
    runner: R,
}

impl Launcher<SystemRunner> {
    pub fn new(script_dir: &Path, config: LauncherConfig) -> Self {
        Self::with_runner(script_dir, config, SystemRunner)
    }
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn with_runner(script_dir: &Path, config: LauncherConfig, runner: R) -> Self {
        let layout = ProjectLayout::new(script_dir, &config);
        Self {
            config,
            layout,
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The child command: `<runtime> -m <module> run <entry> [args...]`,
    /// run from the project root.
    pub fn command(&self) -> LaunchCommand {
        LaunchCommand::new(&self.config.runtime, &self.layout.project_root)
            .args(["-m", self.config.module.as_str(), "run", self.config.entry.as_str()])
            .args(&self.config.args)
    }

    /// Check the project, announce, then spawn and wait for the application.
    ///
    /// Precondition failures come back as `Err` before anything is printed or
    /// spawned. Every child outcome, including failures, is `Ok`.
    pub fn run(&self) -> Result<LaunchOutcome, LaunchError> {
        tracing::debug!(root = %self.layout.project_root.display(), "validating project");
        self.layout.validate()?;

        println!("{}", banner(&self.config, &self.layout));

        let outcome = self.runner.run(&self.command());
        if let Some(report) = report(&outcome, &self.layout) {
            println!("{}", report);
        }
        Ok(outcome)
    }
}

/// Status lines printed right before the application starts.
pub fn banner(config: &LauncherConfig, layout: &ProjectLayout) -> String {
    [
        format!("🚀 Starting {}...", config.app_name),
        format!("📁 Working directory: {}", layout.project_root.display()),
        "🌐 The app will open in your default browser".to_string(),
        "⏹️  Press Ctrl+C to stop the application".to_string(),
        "-".repeat(SEPARATOR_WIDTH),
    ]
    .join("\n")
}

/// Console text for a finished run. A clean exit prints nothing.
pub fn report(outcome: &LaunchOutcome, layout: &ProjectLayout) -> Option<String> {
    match outcome {
        LaunchOutcome::Success => None,
        LaunchOutcome::Interrupted => Some("\n👋 Application stopped by user".to_string()),
        LaunchOutcome::NonZeroExit { detail, .. } => Some(format!(
            "❌ Error running application: {}\n💡 Make sure you have installed all requirements:\n   {}",
            detail,
            layout.install_hint()
        )),
        LaunchOutcome::SpawnError(detail) => Some(format!("❌ Unexpected error: {}", detail)),
    }
}
