//! Pages command implementation.
//!
//! Site-wide favorite pages and visit history, shared with the rest of the
//! portfolio site under the `pgp.` storage prefix.

use chrono::Local;

use crate::cli::args::{PagesArgs, PagesSubcommand};
use crate::context::ToolsContext;
use crate::error::Result;
use crate::ui::{confirm, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The pages command implementation.
pub struct PagesCommand {
    args: PagesArgs,
}

impl PagesCommand {
    /// Create a new pages command.
    pub fn new(args: PagesArgs) -> Self {
        Self { args }
    }
}

impl Command for PagesCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.command {
            PagesSubcommand::Favorite { id, name, emoji } => {
                let on = ctx.page_favorites().toggle(id, name, emoji.as_deref())?;
                if on {
                    ui.success(&format!("Added \"{}\" to favorite pages", name));
                } else {
                    ui.success(&format!("Removed \"{}\" from favorite pages", name));
                }
            }
            PagesSubcommand::Favorites => {
                let favorites = ctx.page_favorites().list()?;
                if favorites.is_empty() {
                    ui.message("No favorite pages yet.");
                    return Ok(CommandResult::success());
                }

                let mut table = Table::new(vec!["", "Page", "ID", "Added"]);
                for favorite in &favorites {
                    table.add_row(vec![
                        favorite.emoji.clone(),
                        favorite.name.clone(),
                        favorite.id.clone(),
                        favorite
                            .added_at
                            .with_timezone(&Local)
                            .format("%Y-%m-%d %H:%M")
                            .to_string(),
                    ]);
                }
                ui.message(&table.render());
            }
            PagesSubcommand::Visit { url, name, emoji } => {
                ctx.history().record(url, name, emoji.as_deref())?;
                ui.success(&format!("Recorded visit to {}", url));
            }
            PagesSubcommand::History => {
                let visits = ctx.history().list()?;
                if visits.is_empty() {
                    ui.message("No pages visited yet.");
                    return Ok(CommandResult::success());
                }

                let mut table = Table::new(vec!["", "Page", "URL", "Visited"]).with_max_width(2, 50);
                for visit in &visits {
                    table.add_row(vec![
                        visit.emoji.clone(),
                        visit.name.clone(),
                        visit.url.clone(),
                        visit
                            .visited_at
                            .with_timezone(&Local)
                            .format("%Y-%m-%d %H:%M")
                            .to_string(),
                    ]);
                }
                ui.message(&table.render());
            }
            PagesSubcommand::ClearHistory { yes } => {
                if !yes && !confirm(ui, "clear_history", "Forget every visited page?", false)? {
                    ui.warning("History kept");
                    return Ok(CommandResult::failure(1));
                }
                ctx.history().clear()?;
                ui.success("Visit history cleared");
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> ToolsContext {
        ToolsContext::init(ToolsConfig::default().with_data_dir(Some(temp.path().to_path_buf())))
            .unwrap()
    }

    fn run(ctx: &mut ToolsContext, ui: &mut MockUI, command: PagesSubcommand) -> CommandResult {
        PagesCommand::new(PagesArgs { command })
            .execute(ctx, ui)
            .unwrap()
    }

    #[test]
    fn favorite_toggles_page() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();
        let favorite = || PagesSubcommand::Favorite {
            id: "gallery".into(),
            name: "Gallery".into(),
            emoji: Some("🖼".into()),
        };

        run(&mut ctx, &mut ui, favorite());
        assert!(ctx.page_favorites().is_favorite("gallery").unwrap());

        run(&mut ctx, &mut ui, PagesSubcommand::Favorites);
        assert!(ui.has_message("Gallery"));

        run(&mut ctx, &mut ui, favorite());
        assert!(!ctx.page_favorites().is_favorite("gallery").unwrap());
    }

    #[test]
    fn visits_are_listed_most_recent_first() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        for (url, name) in [("/a.html", "A"), ("/b.html", "B")] {
            run(
                &mut ctx,
                &mut ui,
                PagesSubcommand::Visit {
                    url: url.into(),
                    name: name.into(),
                    emoji: None,
                },
            );
        }

        let visits = ctx.history().list().unwrap();
        assert_eq!(visits[0].url, "/b.html");
        assert_eq!(visits[1].url, "/a.html");

        run(&mut ctx, &mut ui, PagesSubcommand::History);
        assert!(ui.has_message("/b.html"));
    }

    #[test]
    fn clear_history_needs_confirmation() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();
        ctx.history().record("/a.html", "A", None).unwrap();

        let declined = run(&mut ctx, &mut ui, PagesSubcommand::ClearHistory { yes: false });
        assert!(!declined.success);
        assert_eq!(ctx.history().list().unwrap().len(), 1);

        run(&mut ctx, &mut ui, PagesSubcommand::ClearHistory { yes: true });
        assert!(ctx.history().list().unwrap().is_empty());
    }

    #[test]
    fn empty_lists_show_hints() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        run(&mut ctx, &mut ui, PagesSubcommand::Favorites);
        run(&mut ctx, &mut ui, PagesSubcommand::History);
        assert!(ui.has_message("No favorite pages yet"));
        assert!(ui.has_message("No pages visited yet"));
    }
}
