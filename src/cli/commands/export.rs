//! Export command implementation.
//!
//! The `solace-tools export` command writes every saved result and the
//! comparison selection to a versioned JSON backup.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::cli::args::ExportArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::backup_filename;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(args: ExportArgs) -> Self {
        Self { args }
    }

    fn target(&self) -> PathBuf {
        self.args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(backup_filename(Utc::now().date_naive())))
    }
}

impl Command for ExportCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let payload = ctx.results().export_backup()?;
        let json = payload.to_json_pretty()?;
        let count = payload.results.len();

        ctx.track(ctx.event("tools_backup_export").with("result_count", count));

        let target = self.target();
        if target == Path::new("-") {
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, format!("{}\n", json))?;

        ui.success(&format!("Exported {} result(s) to {}", count, target.display()));
        Ok(CommandResult::success())
    }
}
