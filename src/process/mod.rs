pub mod interrupt;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use interrupt::InterruptGuard;

/// A fully resolved child command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

impl LaunchCommand {
    pub fn new(program: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a spawn-and-wait ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    /// The operator sent an interrupt while the child was running
    Interrupted,
    NonZeroExit { code: Option<i32>, detail: String },
    SpawnError(String),
}

pub trait ProcessRunner {
    /// Start `command` and block until it exits.
    fn run(&self, command: &LaunchCommand) -> LaunchOutcome;
}

/// Runs the command as a real child process of the launcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &LaunchCommand) -> LaunchOutcome {
        // Ctrl+C reaches the whole foreground process group, so the launcher
        // has to outlive it to report the interrupt.
        let guard = match InterruptGuard::install() {
            Ok(guard) => Some(guard),
            Err(err) => {
                tracing::warn!("failed to install interrupt handler: {}", err);
                None
            }
        };

        tracing::info!(command = %command, cwd = %command.cwd.display(), "spawning application");
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .status();

        let interrupted = guard.as_ref().is_some_and(InterruptGuard::interrupted);
        let outcome = match status {
            Ok(status) => classify(command, status, interrupted),
            Err(err) => LaunchOutcome::SpawnError(format!(
                "failed to start '{}': {}",
                command.program.to_string_lossy(),
                err
            )),
        };
        tracing::debug!(?outcome, "application finished");
        outcome
    }
}

/// Map a finished child onto an outcome. An interrupt seen by the launcher
/// wins over whatever status the child chose to exit with.
pub fn classify(command: &LaunchCommand, status: ExitStatus, interrupted: bool) -> LaunchOutcome {
    if interrupted || killed_by_interrupt(status) {
        return LaunchOutcome::Interrupted;
    }
    if status.success() {
        return LaunchOutcome::Success;
    }

    let detail = match status.code() {
        Some(code) => format!("Command '{}' returned non-zero exit status {}.", command, code),
        None => format!("Command '{}' was terminated: {}.", command, status),
    };
    LaunchOutcome::NonZeroExit {
        code: status.code(),
        detail,
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;

    status.signal() == Some(nix::sys::signal::Signal::SIGINT as i32)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: ExitStatus) -> bool {
    false
}
