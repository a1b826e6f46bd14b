//! Edit command implementation.
//!
//! The `solace-tools edit` command replaces the editable fields of a saved
//! result. Flags that are not given keep the current value.

use crate::cli::args::EditArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::{ActionOutcome, ResultAction, ResultFields, SavedResult};
use crate::ui::UserInterface;

use super::add::{fields_from_args, prompt_fields};
use super::dispatcher::{Command, CommandResult};

/// The edit command implementation.
pub struct EditCommand {
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(args: EditArgs) -> Self {
        Self { args }
    }
}

impl Command for EditCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = ResultAction::Edit.dispatch(&mut ctx.results(), &self.args.id)?;
        ctx.track(
            ctx.event(ResultAction::Edit.event_name())
                .label(outcome.event_label()),
        );

        let ActionOutcome::Edit(current) = outcome else {
            return Ok(CommandResult::failure(1));
        };

        let current = current_fields(&current);
        let fields = if ui.is_interactive() && !self.args.fields.has_fields() {
            prompt_fields(ui, &current)?
        } else {
            fields_from_args(&self.args.fields, current)
        };

        let updated = ctx.results().update(&self.args.id, &fields)?;
        ctx.track(
            ctx.event("tools_result_edit_submit")
                .label(updated.category.as_str()),
        );

        ui.success(&format!("Updated \"{}\" ({})", updated.title, updated.id));
        Ok(CommandResult::success())
    }
}

fn current_fields(result: &SavedResult) -> ResultFields {
    ResultFields {
        title: result.title.clone(),
        category: result.category.as_str().to_string(),
        before_image: result.before_image.clone(),
        after_image: result.after_image.clone(),
        share_text: result.share_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::AddArgs;
    use crate::config::ToolsConfig;
    use crate::error::SolaceError;
    use crate::results::Category;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn seeded(temp: &TempDir) -> (ToolsContext, SavedResult) {
        let mut ctx = ToolsContext::init(
            ToolsConfig::default().with_data_dir(Some(temp.path().to_path_buf())),
        )
        .unwrap();
        let saved = ctx
            .results()
            .create(&ResultFields::new("Palette", "Warm").with_images("a.png", "b.png"))
            .unwrap();
        (ctx, saved)
    }

    fn edit(id: &str, fields: AddArgs) -> EditCommand {
        EditCommand::new(EditArgs {
            id: id.to_string(),
            fields,
        })
    }

    #[test]
    fn unspecified_flags_keep_current_values() {
        let temp = TempDir::new().unwrap();
        let (mut ctx, saved) = seeded(&temp);
        let mut ui = MockUI::new();

        edit(
            &saved.id,
            AddArgs {
                category: Some("main".into()),
                ..Default::default()
            },
        )
        .execute(&mut ctx, &mut ui)
        .unwrap();

        let updated = ctx.results().get(&saved.id).unwrap();
        assert_eq!(updated.category, Category::Main);
        assert_eq!(updated.title, "Palette");
        assert_eq!(updated.before_image, "a.png");
        assert_eq!(updated.created_at, saved.created_at);
    }

    #[test]
    fn blank_share_text_leaves_record_unchanged() {
        let temp = TempDir::new().unwrap();
        let (mut ctx, saved) = seeded(&temp);
        let mut ui = MockUI::new();

        let err = edit(
            &saved.id,
            AddArgs {
                share: Some(" ".into()),
                ..Default::default()
            },
        )
        .execute(&mut ctx, &mut ui)
        .unwrap_err();

        assert!(matches!(err, SolaceError::Validation { .. }));
        assert_eq!(ctx.results().get(&saved.id).unwrap().share_text, "Warm");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let temp = TempDir::new().unwrap();
        let (mut ctx, _) = seeded(&temp);
        let mut ui = MockUI::new();

        let err = edit("missing", AddArgs::default())
            .execute(&mut ctx, &mut ui)
            .unwrap_err();
        assert!(matches!(err, SolaceError::NotFound { .. }));
    }

    #[test]
    fn records_open_and_submit_events() {
        let temp = TempDir::new().unwrap();
        let (mut ctx, saved) = seeded(&temp);
        let mut ui = MockUI::new();

        edit(&saved.id, AddArgs::default())
            .execute(&mut ctx, &mut ui)
            .unwrap();

        let names: Vec<_> = ctx
            .analytics()
            .list_all()
            .unwrap()
            .into_iter()
            .map(|e| e.event_name)
            .filter(|n| n != "funnel_event")
            .collect();
        assert_eq!(names, vec!["tools_result_edit_open", "tools_result_edit_submit"]);
    }

    #[test]
    fn interactive_edit_offers_current_values() {
        let temp = TempDir::new().unwrap();
        let (mut ctx, saved) = seeded(&temp);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("title", "Renamed");

        edit(&saved.id, AddArgs::default())
            .execute(&mut ctx, &mut ui)
            .unwrap();

        let updated = ctx.results().get(&saved.id).unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.share_text, "Warm");
        assert_eq!(updated.after_image, "b.png");
    }
}
