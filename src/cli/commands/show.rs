//! Show command implementation.

use crate::context::ToolsContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_result, theme};

/// The show command implementation.
pub struct ShowCommand {
    id: String,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = ctx.results().get(&self.id)?;
        let theme = theme();
        show_result(ui, &result, &theme);

        let selected = ctx.results().compare_selection()?.contains(&result.id);
        ui.message(&theme.format_field("Comparing", if selected { "yes" } else { "no" }));

        Ok(CommandResult::success())
    }
}
