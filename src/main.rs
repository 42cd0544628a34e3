use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use app_launcher::{commands, config, launcher::script_dir};

#[derive(Parser)]
#[command(
    name = "run-app",
    version,
    about = "Start the Streamlit application in project-root"
)]
struct Cli {
    /// Run as if the launcher was installed in <dir>
    #[arg(short = 'C', global = true, value_name = "dir")]
    directory: Option<PathBuf>,

    /// Config file (defaults to launcher.yaml next to the launcher)
    #[arg(long, global = true, value_name = "path")]
    config: Option<PathBuf>,

    /// Interpreter used to run the application
    #[arg(long, global = true, value_name = "bin")]
    runtime: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project-root and start the application (default)
    Launch,
    /// Check project-root and the runtime without starting anything
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let script_dir = match cli.directory {
        Some(dir) => std::fs::canonicalize(&dir)
            .with_context(|| format!("Failed to resolve {}", dir.display()))?,
        None => script_dir()?,
    };

    let mut config = config::resolve(&script_dir, cli.config.as_deref())?;
    if let Some(runtime) = cli.runtime {
        config.runtime = runtime;
        config::validate(&config)?;
    }

    match cli.command.unwrap_or(Commands::Launch) {
        Commands::Launch => commands::launch::run(&script_dir, config),
        Commands::Check => commands::check::run(&script_dir, &config),
    }
}
