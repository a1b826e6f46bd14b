//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::results::{ImportMode, SortMode};
use crate::view::CategoryFilter;

/// Solace Tools - saved before/after results, backups, and the tool catalog.
#[derive(Debug, Parser)]
#[command(name = "solace-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (merged over ~/.solace-tools/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the storage file and analytics log
    #[arg(long, global = true, env = "SOLACE_TOOLS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never prompt; answers come from flags, SOLACE_TOOLS_PROMPT_* or defaults
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Save a new result
    Add(AddArgs),

    /// Edit a saved result
    Edit(EditArgs),

    /// Delete a saved result
    Delete(IdArgs),

    /// Toggle the favorite flag of a result
    Favorite(IdArgs),

    /// Toggle a result in the comparison, or show the comparison
    Compare(CompareArgs),

    /// List saved results (default if no command specified)
    List(ListArgs),

    /// Show one saved result
    Show(IdArgs),

    /// Print a result's share text
    Copy(IdArgs),

    /// Download a result's image
    Image(ImageArgs),

    /// Write a JSON backup of results and the comparison
    Export(ExportArgs),

    /// Restore results from a JSON backup
    Import(ImportArgs),

    /// Browse the tool catalog
    Tools(ToolsArgs),

    /// Reset sort, filter, search, and comparison
    Reset(ResetArgs),

    /// Site-wide favorite pages and visit history
    Pages(PagesArgs),

    /// Show recorded analytics events
    Analytics(AnalyticsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for commands that target one result.
#[derive(Debug, Clone, Args)]
pub struct IdArgs {
    /// Result ID
    pub id: String,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AddArgs {
    /// Result title (required)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Tool category: color or main
    #[arg(long)]
    pub category: Option<String>,

    /// Before image URL
    #[arg(long)]
    pub before: Option<String>,

    /// After image URL
    #[arg(long)]
    pub after: Option<String>,

    /// Text to share (required)
    #[arg(short, long)]
    pub share: Option<String>,
}

impl AddArgs {
    /// Whether any field was given on the command line.
    pub fn has_fields(&self) -> bool {
        self.title.is_some()
            || self.category.is_some()
            || self.before.is_some()
            || self.after.is_some()
            || self.share.is_some()
    }
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Result ID
    pub id: String,

    #[command(flatten)]
    pub fields: AddArgs,
}

/// Arguments for the `compare` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CompareArgs {
    /// Result ID to toggle
    #[arg(conflicts_with = "clear")]
    pub id: Option<String>,

    /// Empty the comparison
    #[arg(long)]
    pub clear: bool,

    /// Show the selected results (default when no ID is given)
    #[arg(long, conflicts_with_all = ["id", "clear"])]
    pub show: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Sort order to use and remember: newest or favorite
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// Only favorites, newest first
    #[arg(long)]
    pub favorites: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `image` command.
#[derive(Debug, Clone, Args)]
pub struct ImageArgs {
    /// Result ID
    pub id: String,

    /// Directory to write the image into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output file, or `-` for stdout (default: solace-tools-backup-YYYYMMDD.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Backup file to restore
    pub file: PathBuf,

    /// append keeps existing results; replace overwrites them
    #[arg(short, long, default_value_t = ImportMode::Append)]
    pub mode: ImportMode,

    /// Skip the confirmation for replace mode
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `tools` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ToolsArgs {
    /// Category to show and remember: all, color, or main
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Search text to apply and remember (empty string clears it)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResetArgs {
    /// Skip the confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `pages` command.
#[derive(Debug, Clone, Args)]
pub struct PagesArgs {
    #[command(subcommand)]
    pub command: PagesSubcommand,
}

/// Pages subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PagesSubcommand {
    /// Toggle a page in favorites
    Favorite {
        /// Page ID
        id: String,
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Display emoji
        #[arg(short, long)]
        emoji: Option<String>,
    },
    /// List favorite pages
    Favorites,
    /// Record a page visit
    Visit {
        /// Page URL
        url: String,
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Display emoji
        #[arg(short, long)]
        emoji: Option<String>,
    },
    /// Show visit history, most recent first
    History,
    /// Forget all visits
    ClearHistory {
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the `analytics` command.
#[derive(Debug, Clone, Args)]
pub struct AnalyticsArgs {
    /// Number of recent events to show
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Output as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
