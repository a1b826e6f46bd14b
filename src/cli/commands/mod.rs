//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`solace-tools add`, `solace-tools list`)
//! - One storage context opened per invocation
//! - Consistent global flag handling

pub mod action;
pub mod add;
pub mod analytics;
pub mod compare;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod edit;
pub mod export;
pub mod image;
pub mod import;
pub mod list;
pub mod pages;
pub mod reset;
pub mod show;
pub mod tools;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
