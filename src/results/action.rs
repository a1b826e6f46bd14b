//! Per-result actions, dispatched by name.

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::storage::KeyValueStorage;

use super::{ResultStore, SavedResult};

/// An action a user can take on a single saved result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    Edit,
    Favorite,
    Compare,
    ExportImage,
    Copy,
    Delete,
}

impl ResultAction {
    /// All actions, in display order.
    pub const ALL: [ResultAction; 6] = [
        Self::Edit,
        Self::Favorite,
        Self::Compare,
        Self::ExportImage,
        Self::Copy,
        Self::Delete,
    ];

    /// The action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Favorite => "favorite",
            Self::Compare => "compare",
            Self::ExportImage => "export",
            Self::Copy => "copy",
            Self::Delete => "delete",
        }
    }

    /// Analytics event recorded when the action runs.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Edit => "tools_result_edit_open",
            Self::Favorite => "tools_result_favorite_toggle",
            Self::Compare => "tools_result_compare_toggle",
            Self::ExportImage => "tools_result_export_image",
            Self::Copy => "tools_result_copy_text",
            Self::Delete => "tools_result_delete",
        }
    }

    /// Run the action against the store.
    ///
    /// Store-side effects (favorite, compare, delete) are applied here.
    /// Edit, image export and copy need the caller's surface, so they hand
    /// the record back.
    pub fn dispatch<S: KeyValueStorage>(
        self,
        store: &mut ResultStore<S>,
        id: &str,
    ) -> Result<ActionOutcome> {
        let target = store.get(id)?;

        let outcome = match self {
            Self::Edit => ActionOutcome::Edit(target),
            Self::Favorite => {
                let on = store.toggle_favorite(id)?;
                ActionOutcome::Favorite { target, on }
            }
            Self::Compare => {
                let selected = store.toggle_compare(id)?;
                ActionOutcome::Compare { target, selected }
            }
            Self::ExportImage => ActionOutcome::ExportImage(target),
            Self::Copy => ActionOutcome::Copy(target),
            Self::Delete => {
                store.delete(id)?;
                ActionOutcome::Deleted(target)
            }
        };

        tracing::debug!("Dispatched {} on {}", self, id);
        Ok(outcome)
    }
}

impl fmt::Display for ResultAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown action: {}", s))
    }
}

/// What happened when an action was dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The record to edit.
    Edit(SavedResult),
    /// Favorite flag after toggling.
    Favorite { target: SavedResult, on: bool },
    /// Selection state after toggling.
    Compare { target: SavedResult, selected: bool },
    /// The record whose image should be saved.
    ExportImage(SavedResult),
    /// The record whose share text should be copied.
    Copy(SavedResult),
    /// The record as it was before deletion.
    Deleted(SavedResult),
}

impl ActionOutcome {
    /// The record the action applied to.
    pub fn target(&self) -> &SavedResult {
        match self {
            Self::Edit(target)
            | Self::ExportImage(target)
            | Self::Copy(target)
            | Self::Deleted(target) => target,
            Self::Favorite { target, .. } | Self::Compare { target, .. } => target,
        }
    }

    /// Label attached to the analytics event for this outcome.
    pub fn event_label(&self) -> &'static str {
        match self {
            Self::Favorite { on: true, .. } => "on",
            Self::Favorite { on: false, .. } => "off",
            other => other.target().category.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolaceError;
    use crate::results::{ResultFields, SequenceGenerator};
    use crate::storage::MemoryStorage;

    fn seeded() -> (ResultStore<MemoryStorage>, String) {
        let mut store =
            ResultStore::new(MemoryStorage::new()).with_id_generator(SequenceGenerator::new("r"));
        let created = store
            .create(&ResultFields::new("Logo", "share").with_category("main"))
            .unwrap();
        (store, created.id)
    }

    #[test]
    fn parses_action_names() {
        assert_eq!("export".parse::<ResultAction>().unwrap(), ResultAction::ExportImage);
        assert_eq!("delete".parse::<ResultAction>().unwrap(), ResultAction::Delete);
        assert!("share".parse::<ResultAction>().is_err());
    }

    #[test]
    fn names_round_trip_through_display() {
        for action in ResultAction::ALL {
            assert_eq!(action.to_string().parse::<ResultAction>().unwrap(), action);
        }
    }

    #[test]
    fn favorite_toggles_and_labels() {
        let (mut store, id) = seeded();
        let outcome = ResultAction::Favorite.dispatch(&mut store, &id).unwrap();
        assert_eq!(outcome.event_label(), "on");
        assert!(store.get(&id).unwrap().is_favorite);
    }

    #[test]
    fn compare_toggles_selection() {
        let (mut store, id) = seeded();
        let outcome = ResultAction::Compare.dispatch(&mut store, &id).unwrap();
        assert!(matches!(outcome, ActionOutcome::Compare { selected: true, .. }));
        assert_eq!(outcome.event_label(), "main");
    }

    #[test]
    fn delete_removes_result() {
        let (mut store, id) = seeded();
        let outcome = ResultAction::Delete.dispatch(&mut store, &id).unwrap();
        assert_eq!(outcome.target().title, "Logo");
        assert!(store.load_results().unwrap().is_empty());
    }

    #[test]
    fn copy_leaves_store_untouched() {
        let (mut store, id) = seeded();
        let outcome = ResultAction::Copy.dispatch(&mut store, &id).unwrap();
        assert_eq!(outcome.target().share_text, "share");
        assert!(!store.get(&id).unwrap().is_favorite);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut store, _) = seeded();
        let err = ResultAction::Edit.dispatch(&mut store, "missing").unwrap_err();
        assert!(matches!(err, SolaceError::NotFound { .. }));
    }
}
