//! Import command implementation.
//!
//! The `solace-tools import` command restores a JSON backup. Append mode
//! keeps existing results and renames colliding ids; replace mode
//! overwrites results and the comparison after a confirmation.

use std::fs;

use crate::cli::args::ImportArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::ImportMode;
use crate::ui::{confirm, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(args: ImportArgs) -> Self {
        Self { args }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = self.args.mode;

        if mode == ImportMode::Replace && !self.args.yes {
            let confirmed = confirm(
                ui,
                "replace",
                "Replace all saved results and the comparison with this backup?",
                false,
            )?;
            if !confirmed {
                ui.warning("Import cancelled");
                return Ok(CommandResult::failure(1));
            }
        }

        let text = fs::read_to_string(&self.args.file)?;
        let summary = ctx.results().import_backup(&text, mode)?;

        ctx.track(
            ctx.event("tools_backup_import")
                .label(mode.as_str())
                .with("imported_count", summary.imported),
        );

        ui.success(&format!(
            "Restored {} result(s) from {} ({})",
            summary.imported,
            self.args.file.display(),
            mode
        ));
        if summary.reassigned > 0 {
            ui.message(&format!(
                "{} imported result(s) got new ids to avoid collisions",
                summary.reassigned
            ));
        }

        Ok(CommandResult::success())
    }
}
