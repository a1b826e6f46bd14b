//! Analytics command implementation.
//!
//! The `solace-tools analytics` command shows the most recent events from
//! the local analytics log.

use serde_json::Value;

use crate::analytics::AnalyticsEvent;
use crate::cli::args::AnalyticsArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::format_created;

/// The analytics command implementation.
pub struct AnalyticsCommand {
    args: AnalyticsArgs,
}

impl AnalyticsCommand {
    /// Create a new analytics command.
    pub fn new(args: AnalyticsArgs) -> Self {
        Self { args }
    }
}

impl Command for AnalyticsCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ctx.analytics().is_enabled() {
            ui.warning("Analytics logging is disabled in the config");
        }

        let events = ctx.analytics().recent(self.args.limit)?;

        if self.args.json {
            for event in &events {
                println!("{}", serde_json::to_string(event).map_err(anyhow::Error::from)?);
            }
            return Ok(CommandResult::success());
        }

        if events.is_empty() {
            ui.message(&format!(
                "No events recorded in {}",
                ctx.analytics().path().display()
            ));
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Time", "Event", "Label"]);
        for event in &events {
            table.add_row(vec![
                format_created(event.timestamp),
                event.event_name.clone(),
                describe(event),
            ]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }
}

/// The event label, or the funnel stage for funnel events.
fn describe(event: &AnalyticsEvent) -> String {
    ["event_label", "funnel_stage"]
        .iter()
        .find_map(|key| match event.payload.get(*key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_default()
}
