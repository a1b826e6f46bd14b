//! Reset command implementation.
//!
//! The `solace-tools reset` command forgets the sort mode, catalog filter,
//! search text, and comparison. Saved results and favorites are kept.

use crate::cli::args::ResetArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::ui::{confirm, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(args: ResetArgs) -> Self {
        Self { args }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.yes {
            let confirmed = confirm(
                ui,
                "reset",
                "Reset search, filter, sort order, and comparison? Saved results and favorites are kept.",
                false,
            )?;
            if !confirmed {
                ui.warning("Reset cancelled");
                return Ok(CommandResult::failure(1));
            }
        }

        ctx.view().reset()?;
        ctx.track(ctx.event("tools_state_reset").label("view_and_compare"));

        ui.success("View settings and comparison reset");
        Ok(CommandResult::success())
    }
}
