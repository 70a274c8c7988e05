//! regen CLI
//!
//! Keeps generated regions of source files in sync with the declarations
//! they mirror.

mod cli;
mod commands;
mod error;
mod exit;

use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use regen_fs::RobustnessConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};
use exit::ExitKind;

fn main() -> ExitCode {
    match run() {
        Ok(kind) => kind.into(),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitKind::Error.into()
        }
    }
}

fn run() -> Result<ExitKind> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(&cli.config, cmd),
        None => {
            println!("{} keeps generated code in sync", "regen".green().bold());
            println!();
            println!("Run {} for available commands.", "regen --help".cyan());
            Ok(ExitKind::Unchanged)
        }
    }
}

/// Install the log subscriber. `-v` forces debug; otherwise `RUST_LOG`
/// decides, defaulting to warnings only.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

fn execute_command(config: &std::path::Path, cmd: Commands) -> Result<ExitKind> {
    match cmd {
        Commands::Check { target, diff, json } => {
            commands::run_check(config, target.as_deref(), diff, json)
        }
        Commands::Sync {
            target,
            dry_run,
            json,
            lock_timeout,
            no_fsync,
        } => {
            let robustness = RobustnessConfig {
                lock_timeout: Duration::from_secs(lock_timeout),
                enable_fsync: !no_fsync,
            };
            commands::run_sync(config, target.as_deref(), dry_run, json, robustness)
        }
        Commands::Diff { target } => commands::run_diff(config, target.as_deref()),
        Commands::Variants { name, json } => commands::run_variants(config, &name, json),
        Commands::List { json } => commands::run_list(config, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "regen", &mut std::io::stdout());
            Ok(ExitKind::Unchanged)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = execute_command(
            &temp.path().join("regen.toml"),
            Commands::List { json: false },
        );
        assert!(matches!(result, Err(CliError::Core(regen_core::Error::Fs(_)))));
    }

    #[test]
    fn test_cli_command_is_consistent() {
        Cli::command().debug_assert();
    }
}
