//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands each one the shared
//! [`CommandContext`] (task file and cache locations).

pub mod cache;
pub mod dispatcher;
pub mod due;
pub mod run;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
