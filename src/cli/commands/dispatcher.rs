//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::default_cache_dir;
use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Locations shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    tasks_path: PathBuf,
    cache_dir: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context from the task file path and an optional cache
    /// directory override.
    pub fn new(tasks_path: impl Into<PathBuf>, cache_dir: Option<PathBuf>) -> Self {
        Self {
            tasks_path: tasks_path.into(),
            cache_dir,
        }
    }

    /// Get the task file path.
    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    /// Directory containing the task file.
    ///
    /// Falls back to the path's lexical parent when the file does not exist.
    pub fn base_dir(&self) -> PathBuf {
        let parent = |path: &Path| {
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        };

        match fs::canonicalize(&self.tasks_path) {
            Ok(path) => parent(&path),
            Err(_) => parent(&self.tasks_path),
        }
    }

    /// Cache directory for tasks whose file lives in `base_dir`.
    pub fn cache_dir_for(&self, base_dir: &Path) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| default_cache_dir(base_dir))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Create a dispatcher from parsed global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(CommandContext::new(&cli.tasks, cli.cache_dir.clone()))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Due(args)) => {
                let cmd = super::due::DueCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Cache(args)) => {
                let cmd = super::cache::CacheCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to run command with default args
                let cmd = super::run::RunCommand::new(self.context.clone(), RunArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
