//! Per-result action commands.
//!
//! `delete`, `favorite`, and `copy` all route a [`ResultAction`] through
//! the result store and record the matching analytics event.

use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::{ActionOutcome, ResultAction};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs one [`ResultAction`] against one result.
pub struct ActionCommand {
    action: ResultAction,
    id: String,
}

impl ActionCommand {
    /// Create a new action command.
    pub fn new(action: ResultAction, id: &str) -> Self {
        Self {
            action,
            id: id.to_string(),
        }
    }
}

impl Command for ActionCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.action.dispatch(&mut ctx.results(), &self.id)?;
        ctx.track(
            ctx.event(self.action.event_name())
                .label(outcome.event_label()),
        );

        match outcome {
            ActionOutcome::Deleted(target) => {
                ui.success(&format!("Deleted \"{}\"", target.title));
            }
            ActionOutcome::Favorite { target, on } => {
                let state = if on { "Added to" } else { "Removed from" };
                ui.success(&format!("{} favorites: \"{}\"", state, target.title));
            }
            ActionOutcome::Compare { target, selected } => {
                let state = if selected { "Added to" } else { "Removed from" };
                ui.success(&format!("{} comparison: \"{}\"", state, target.title));
            }
            ActionOutcome::Copy(target) => {
                if target.share_text.is_empty() {
                    ui.warning(&format!("\"{}\" has no share text to copy", target.title));
                    return Ok(CommandResult::failure(1));
                }
                println!("{}", target.share_text);
            }
            ActionOutcome::Edit(_) | ActionOutcome::ExportImage(_) => {
                tracing::debug!("{} is handled by its own command", self.action);
            }
        }

        Ok(CommandResult::success())
    }
}
