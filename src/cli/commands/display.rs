//! Shared display helpers for saved results.
//!
//! Used by `list`, `show`, `compare`, and any other command that renders
//! [`SavedResult`] values.

use chrono::{Local, TimeZone};

use crate::results::SavedResult;
use crate::ui::{should_use_colors, SolaceTheme, Table, UserInterface};

/// Theme matching the current color settings.
pub fn theme() -> SolaceTheme {
    if should_use_colors() {
        SolaceTheme::new()
    } else {
        SolaceTheme::plain()
    }
}

/// Creation time in local time, or the raw value when out of range.
pub fn format_created(created_at: i64) -> String {
    match Local.timestamp_millis_opt(created_at).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => created_at.to_string(),
    }
}

/// One row per result: favorite mark, id, title, category, created.
pub fn results_table(results: &[SavedResult], theme: &SolaceTheme) -> Table {
    let mut table = Table::new(vec!["", "ID", "Title", "Category", "Created"])
        .with_max_width(1, 12)
        .with_max_width(2, 40);

    for result in results {
        table.add_row(vec![
            theme.format_favorite(result.is_favorite),
            result.id.clone(),
            result.title.clone(),
            result.category.label().to_string(),
            format_created(result.created_at),
        ]);
    }
    table
}

/// Print every field of a result.
pub fn show_result(ui: &mut dyn UserInterface, result: &SavedResult, theme: &SolaceTheme) {
    ui.show_header(&result.title);
    ui.message(&theme.format_field("ID", &result.id));
    ui.message(&theme.format_field("Title", &result.title));
    ui.message(&theme.format_field("Category", result.category.label()));
    ui.message(&theme.format_field("Favorite", if result.is_favorite { "yes" } else { "no" }));
    ui.message(&theme.format_field("Created", &format_created(result.created_at)));
    ui.message(&theme.format_field("Before", or_dash(&result.before_image)));
    ui.message(&theme.format_field("After", or_dash(&result.after_image)));
    ui.message(&theme.format_field("Share text", &result.share_text));
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
