//! List command implementation.
//!
//! The `solace-tools list` command shows saved results in the remembered
//! sort order. Passing `--sort` changes and remembers the order.

use crate::cli::args::ListArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{results_table, theme};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = match self.args.sort {
            Some(mode) => {
                ctx.view().set_sort_mode(mode)?;
                ctx.track(ctx.event("tools_sort_change").label(mode.as_str()));
                mode
            }
            None => ctx.view().sort_mode()?,
        };

        let results = if self.args.favorites {
            ctx.results().favorites()?
        } else {
            ctx.results().list(mode)?
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&results).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if results.is_empty() {
            if self.args.favorites {
                ui.message("No favorite results yet.");
            } else {
                ui.message("No saved results yet. Add one with: solace-tools add");
            }
            return Ok(CommandResult::success());
        }

        let theme = theme();
        ui.message(&results_table(&results, &theme).render());

        let selected = ctx.results().compare_selection()?.len();
        ui.message(&format!(
            "{} result(s), sorted by {}, {} selected for comparison",
            results.len(),
            mode,
            selected
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use crate::results::{ResultFields, SortMode};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> ToolsContext {
        ToolsContext::init(ToolsConfig::default().with_data_dir(Some(temp.path().to_path_buf())))
            .unwrap()
    }

    #[test]
    fn empty_list_shows_hint() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        ListCommand::new(ListArgs::default())
            .execute(&mut ctx, &mut ui)
            .unwrap();
        assert!(ui.has_message("No saved results yet"));
    }

    #[test]
    fn sort_flag_is_remembered_and_tracked() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        ListCommand::new(ListArgs {
            sort: Some(SortMode::Favorite),
            ..Default::default()
        })
        .execute(&mut ctx, &mut ui)
        .unwrap();

        assert_eq!(ctx.view().sort_mode().unwrap(), SortMode::Favorite);
        let events = ctx.analytics().list_all().unwrap();
        assert_eq!(events[0].event_name, "tools_sort_change");
        assert_eq!(events[0].payload["event_label"], "favorite");
    }

    #[test]
    fn favorites_flag_filters_results() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();
        let starred = ctx
            .results()
            .create(&ResultFields::new("Starred", "x"))
            .unwrap();
        ctx.results()
            .create(&ResultFields::new("Plain", "y"))
            .unwrap();
        ctx.results().toggle_favorite(&starred.id).unwrap();

        ListCommand::new(ListArgs {
            favorites: true,
            ..Default::default()
        })
        .execute(&mut ctx, &mut ui)
        .unwrap();

        assert!(ui.has_message("Starred"));
        assert!(!ui.has_message("Plain"));
    }

    #[test]
    fn listing_does_not_track_without_sort_flag() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        ListCommand::new(ListArgs::default())
            .execute(&mut ctx, &mut ui)
            .unwrap();
        assert!(ctx.analytics().list_all().unwrap().is_empty());
    }
}
