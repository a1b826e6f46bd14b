//! Compare command implementation.
//!
//! The `solace-tools compare` command toggles a result in the two-slot
//! comparison, empties it, or shows the results currently selected.

use crate::cli::args::CompareArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::{ResultAction, COMPARE_CAPACITY};
use crate::ui::UserInterface;

use super::action::ActionCommand;
use super::dispatcher::{Command, CommandResult};
use super::display::{show_result, theme};

/// The compare command implementation.
pub struct CompareCommand {
    args: CompareArgs,
}

impl CompareCommand {
    /// Create a new compare command.
    pub fn new(args: CompareArgs) -> Self {
        Self { args }
    }
}

impl Command for CompareCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(id) = &self.args.id {
            return ActionCommand::new(ResultAction::Compare, id).execute(ctx, ui);
        }

        if self.args.clear {
            ctx.results().clear_compare()?;
            ui.success("Comparison cleared");
            return Ok(CommandResult::success());
        }

        let targets = ctx.results().compare_targets()?;
        if targets.is_empty() {
            ui.message("No results selected for comparison.");
            ui.message("Add one with: solace-tools compare <ID>");
            return Ok(CommandResult::success());
        }

        let theme = theme();
        for target in &targets {
            show_result(ui, target, &theme);
        }
        if targets.len() < COMPARE_CAPACITY {
            ui.message("");
            ui.message("Select one more result to compare side by side.");
        }

        Ok(CommandResult::success())
    }
}
