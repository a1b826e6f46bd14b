//! Image command implementation.
//!
//! The `solace-tools image` command saves a result's after image (or its
//! before image when there is no after image) as `<title>.png`.

use crate::cli::args::ImageArgs;
use crate::context::ToolsContext;
use crate::error::Result;
use crate::results::image::DEFAULT_TIMEOUT;
use crate::results::{ActionOutcome, ImageFetcher, ResultAction};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The image command implementation.
pub struct ImageCommand {
    args: ImageArgs,
}

impl ImageCommand {
    /// Create a new image command.
    pub fn new(args: ImageArgs) -> Self {
        Self { args }
    }
}

impl Command for ImageCommand {
    fn execute(&self, ctx: &mut ToolsContext, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let action = ResultAction::ExportImage;
        let outcome = action.dispatch(&mut ctx.results(), &self.args.id)?;
        ctx.track(ctx.event(action.event_name()).label(outcome.event_label()));

        let ActionOutcome::ExportImage(target) = outcome else {
            return Ok(CommandResult::failure(1));
        };

        let Some(url) = target.image_url() else {
            ui.warning(&format!("\"{}\" has no image URL to save", target.title));
            return Ok(CommandResult::failure(1));
        };

        let fetcher = ImageFetcher::new(DEFAULT_TIMEOUT)?;
        let mut spinner = ui.start_spinner(&format!("Saving image for \"{}\"", target.title));
        match fetcher.save(&target, &self.args.out) {
            Ok(path) => {
                spinner.finish_success(&format!("Saved {}", path.display()));
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("Image download failed");
                tracing::debug!("Image export failed: {:#}", e);
                ui.warning(&format!("{:#}", e));
                ui.message(&format!("Download it manually from: {}", url));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
