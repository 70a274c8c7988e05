//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// regen - Keep generated regions of source files in sync with their declarations
#[derive(Parser, Debug)]
#[command(name = "regen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the target manifest (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "REGEN_CONFIG", default_value = "regen.toml")]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Verify that every generated region is up to date
    ///
    /// Never writes. Exits with 1 if any region is stale.
    Check {
        /// Only check this target
        #[arg(short, long)]
        target: Option<String>,

        /// Show a diff for stale regions
        #[arg(long)]
        diff: bool,

        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },

    /// Regenerate stale regions in place
    ///
    /// Exits with 1 if anything was rewritten, so that a CI step or git hook
    /// fails until a clean re-run confirms the files are stable.
    ///
    /// Examples:
    ///   regen sync                 # Regenerate every target
    ///   regen sync -t exit-codes   # Only one target
    ///   regen sync --dry-run       # Report without writing
    Sync {
        /// Only regenerate this target
        #[arg(short, long)]
        target: Option<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,

        /// Seconds to wait for another process's lock on a file
        #[arg(long, value_name = "SECS", default_value_t = 10)]
        lock_timeout: u64,

        /// Skip fsync before renaming the rewritten file into place
        #[arg(long)]
        no_fsync: bool,
    },

    /// Show what sync would change
    Diff {
        /// Only diff this target
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Print the variants extracted for a target
    Variants {
        /// Name of the target
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List configured targets
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
