//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::ToolsConfig;
use crate::context::ToolsContext;
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
    /// * `ctx` - Storage and analytics for this run
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface)
        -> Result<CommandResult>;
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

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ToolsConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the resolved configuration.
    pub fn new(config: ToolsConfig) -> Self {
        Self { config }
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &ToolsConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Completions are generated without touching storage. Every other
    /// command runs against a fresh [`ToolsContext`].
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            return super::completions::CompletionsCommand::new(args.clone()).execute_standalone();
        }

        let mut ctx = ToolsContext::init(self.config.clone())?;
        let result = self.run(cli, &mut ctx, ui);
        ctx.teardown()?;
        result
    }

    fn run(
        &self,
        cli: &Cli,
        ctx: &mut ToolsContext,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        use super::action::ActionCommand;
        use crate::results::ResultAction;

        match &cli.command {
            Some(Commands::Add(args)) => super::add::AddCommand::new(args.clone()).execute(ctx, ui),
            Some(Commands::Edit(args)) => {
                super::edit::EditCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Delete(args)) => {
                ActionCommand::new(ResultAction::Delete, &args.id).execute(ctx, ui)
            }
            Some(Commands::Favorite(args)) => {
                ActionCommand::new(ResultAction::Favorite, &args.id).execute(ctx, ui)
            }
            Some(Commands::Copy(args)) => {
                ActionCommand::new(ResultAction::Copy, &args.id).execute(ctx, ui)
            }
            Some(Commands::Compare(args)) => {
                super::compare::CompareCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(&args.id).execute(ctx, ui)
            }
            Some(Commands::Image(args)) => {
                super::image::ImageCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Export(args)) => {
                super::export::ExportCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Import(args)) => {
                super::import::ImportCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Tools(args)) => {
                super::tools::ToolsCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Reset(args)) => {
                super::reset::ResetCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Pages(args)) => {
                super::pages::PagesCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Analytics(args)) => {
                super::analytics::AnalyticsCommand::new(args.clone()).execute(ctx, ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ctx, ui)
            }
            None => super::list::ListCommand::new(ListArgs::default()).execute(ctx, ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn dispatcher(temp: &TempDir) -> CommandDispatcher {
        CommandDispatcher::new(
            ToolsConfig::default().with_data_dir(Some(temp.path().to_path_buf())),
        )
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn no_command_lists_results() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["solace-tools"]);
        let mut ui = MockUI::new();

        let result = dispatcher(&temp).dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("No saved results"));
    }

    #[test]
    fn add_then_list_round_trips_through_storage() {
        let temp = TempDir::new().unwrap();
        let d = dispatcher(&temp);
        let mut ui = MockUI::new();

        let add = Cli::parse_from(["solace-tools", "add", "-t", "Palette", "-s", "Look"]);
        assert!(d.dispatch(&add, &mut ui).unwrap().success);

        let list = Cli::parse_from(["solace-tools", "list"]);
        d.dispatch(&list, &mut ui).unwrap();
        assert!(ui.has_message("Palette"));
    }

    #[test]
    fn missing_result_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["solace-tools", "delete", "nope"]);
        let mut ui = MockUI::new();

        let err = dispatcher(&temp).dispatch(&cli, &mut ui).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn completions_do_not_create_storage() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["solace-tools", "completions", "bash"]);
        let mut ui = MockUI::new();

        assert!(dispatcher(&temp).dispatch(&cli, &mut ui).unwrap().success);
        assert!(!temp.path().join("storage.json").exists());
    }
}
