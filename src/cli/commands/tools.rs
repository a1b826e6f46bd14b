//! Tools command implementation.
//!
//! The `solace-tools tools` command lists the built-in tool catalog under
//! the remembered category filter and search text. Either can be changed
//! with a flag, and the new value is remembered.

use crate::cli::args::ToolsArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::ui::{Table, UserInterface};
use crate::view::{builtin_catalog, filter_catalog};

use super::dispatcher::{Command, CommandResult};

/// The tools command implementation.
pub struct ToolsCommand {
    args: ToolsArgs,
}

impl ToolsCommand {
    /// Create a new tools command.
    pub fn new(args: ToolsArgs) -> Self {
        Self { args }
    }
}

impl Command for ToolsCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(filter) = self.args.category {
            ctx.view().set_filter(filter)?;
            ctx.track(ctx.event("tools_filter_change").label(filter.as_str()));
        }

        if let Some(search) = &self.args.search {
            ctx.view().set_search(search)?;
            ctx.track(
                ctx.event("tools_search_input")
                    .with("query_length", search.trim().chars().count()),
            );
        }

        let filter = ctx.view().filter()?;
        let search = ctx.view().search()?;
        let catalog = builtin_catalog()?;
        let visible = filter_catalog(&catalog, filter, &search);

        if visible.is_empty() {
            ui.message("No tools match the current filter.");
            ui.message("Reset it with: solace-tools reset");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Tool", "Category", "Description", "Page"])
            .with_max_width(2, 50);
        for card in &visible {
            table.add_row(vec![
                card.title.clone(),
                card.category.label().to_string(),
                card.description.clone(),
                card.url.clone().unwrap_or_default(),
            ]);
        }
        ui.message(&table.render());

        let mut summary = format!(
            "{} of {} tools, category: {}",
            visible.len(),
            catalog.len(),
            filter.as_str()
        );
        if !search.trim().is_empty() {
            summary.push_str(&format!(", search: \"{}\"", search.trim()));
        }
        ui.message(&summary);

        Ok(CommandResult::success())
    }
}
