//! Command-line interface for solace-tools.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, AnalyticsArgs, CompareArgs, EditArgs, ExportArgs, ImportArgs, ListArgs, PagesArgs,
    PagesSubcommand, ResetArgs, ToolsArgs,
};
pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
