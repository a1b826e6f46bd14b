//! Add command implementation.
//!
//! The `solace-tools add` command saves a new result. Fields come from
//! flags; with no flags on an interactive terminal, each one is asked for.

use crate::cli::args::AddArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::{Category, ResultFields};
use crate::ui::{ask_text, Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }
}

impl Command for AddCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fields = if ui.is_interactive() && !self.args.has_fields() {
            prompt_fields(ui, &ResultFields::default())?
        } else {
            fields_from_args(&self.args, ResultFields::default())
        };

        let saved = ctx.results().create(&fields)?;
        ctx.track(ctx.event("tools_result_save").label(saved.category.as_str()));

        ui.success(&format!("Saved \"{}\" ({})", saved.title, saved.id));
        Ok(CommandResult::success())
    }
}

/// Overlay the flags that were given onto `base`.
pub(super) fn fields_from_args(args: &AddArgs, base: ResultFields) -> ResultFields {
    ResultFields {
        title: args.title.clone().unwrap_or(base.title),
        category: args.category.clone().unwrap_or(base.category),
        before_image: args.before.clone().unwrap_or(base.before_image),
        after_image: args.after.clone().unwrap_or(base.after_image),
        share_text: args.share.clone().unwrap_or(base.share_text),
    }
}

/// Ask for every field, offering the values in `current` as defaults.
pub(super) fn prompt_fields(
    ui: &mut dyn UserInterface,
    current: &ResultFields,
) -> Result<ResultFields> {
    let title = ask_text(ui, "title", "Title", non_empty(&current.title))?;

    let options = vec![
        PromptOption::new(Category::Color.label(), Category::Color.as_str()),
        PromptOption::new(Category::Main.label(), Category::Main.as_str()),
    ];
    let default_category = Category::normalize(&current.category);
    let category = ui
        .prompt(&Prompt::select(
            "category",
            "Category",
            options,
            default_category.as_str(),
        ))?
        .as_string();

    let before_image = ask_text(ui, "before", "Before image URL", Some(&current.before_image))?;
    let after_image = ask_text(ui, "after", "After image URL", Some(&current.after_image))?;
    let share_text = ask_text(ui, "share", "Share text", non_empty(&current.share_text))?;

    Ok(ResultFields {
        title,
        category,
        before_image,
        after_image,
        share_text,
    })
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use crate::error::SolaceError;
    use crate::results::SortMode;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> ToolsContext {
        ToolsContext::init(ToolsConfig::default().with_data_dir(Some(temp.path().to_path_buf())))
            .unwrap()
    }

    fn args(title: &str, share: &str) -> AddArgs {
        AddArgs {
            title: Some(title.to_string()),
            share: Some(share.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn saves_result_from_flags() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        let result = AddCommand::new(args("  Palette ", "Look"))
            .execute(&mut ctx, &mut ui)
            .unwrap();

        assert!(result.success);
        let saved = ctx.results().list(SortMode::Newest).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Palette");
        assert!(ui.successes().iter().any(|m| m.contains("Palette")));
    }

    #[test]
    fn blank_title_is_rejected_without_saving() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();

        let err = AddCommand::new(args("   ", "Look"))
            .execute(&mut ctx, &mut ui)
            .unwrap_err();

        assert!(matches!(err, SolaceError::Validation { .. }));
        assert!(ctx.results().load_results().unwrap().is_empty());
    }

    #[test]
    fn records_save_event_with_category() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();
        let mut add = args("Logo", "Look");
        add.category = Some("main".into());

        AddCommand::new(add).execute(&mut ctx, &mut ui).unwrap();

        let events = ctx.analytics().list_all().unwrap();
        assert_eq!(events[0].event_name, "tools_result_save");
        assert_eq!(events[0].payload["event_label"], "main");
    }

    #[test]
    fn prompts_for_fields_when_interactive() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&temp);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("title", "Gradient");
        ui.set_prompt_response("category", "main");
        ui.set_prompt_response("share", "Smooth");

        AddCommand::new(AddArgs::default())
            .execute(&mut ctx, &mut ui)
            .unwrap();

        let saved = ctx.results().load_results().unwrap();
        assert_eq!(saved[0].title, "Gradient");
        assert_eq!(saved[0].category, Category::Main);
        assert_eq!(ui.prompts_shown().len(), 5);
    }

    #[test]
    fn flags_override_base_fields() {
        let base = ResultFields::new("Old", "Old text").with_category("main");
        let merged = fields_from_args(
            &AddArgs {
                title: Some("New".into()),
                ..Default::default()
            },
            base,
        );
        assert_eq!(merged.title, "New");
        assert_eq!(merged.share_text, "Old text");
        assert_eq!(merged.category, "main");
    }
}
