//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_TASK_FILE;
use crate::schedule::ReferenceClock;

use super::commands::cache::CacheArgs;

/// Harvester - download URLs on a schedule, keeping only changed content.
#[derive(Debug, Parser)]
#[command(name = "harvester")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file
    #[arg(short, long, global = true, env = "HARVESTER_TASKS", default_value = DEFAULT_TASK_FILE)]
    pub tasks: PathBuf,

    /// Cache directory (defaults to .harvester-cache next to the task file)
    #[arg(long, global = true, env = "HARVESTER_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download every due task (default if no command specified)
    Run(RunArgs),

    /// Show which tasks are due, without downloading
    Due(DueArgs),

    /// Inspect or clear the change-detection cache
    Cache(CacheArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Evaluate intervals at this time instead of now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<ReferenceClock>,

    /// HTTP timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            at: None,
            timeout: 30,
        }
    }
}

/// Arguments for the `due` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DueArgs {
    /// Evaluate intervals at this time instead of now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<ReferenceClock>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
