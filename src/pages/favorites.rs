//! Favorite pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{load_json_or, save_json, KeyValueStorage, ScopedStorage};

/// Unscoped key of the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

const DEFAULT_EMOJI: &str = "⭐";

/// A page marked as favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFavorite {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub added_at: DateTime<Utc>,
}

/// Favorite pages, in the order they were added.
pub struct PageFavorites<S> {
    storage: ScopedStorage<S>,
}

impl<S: KeyValueStorage> PageFavorites<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: ScopedStorage::new(storage),
        }
    }

    /// All favorites. A stored value that is not a list reads as empty.
    pub fn list(&self) -> Result<Vec<PageFavorite>> {
        load_json_or(&self.storage, FAVORITES_KEY, Vec::new())
    }

    pub fn is_favorite(&self, id: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|f| f.id == id))
    }

    /// Add the page, or remove it if already present. Returns whether the
    /// page is a favorite afterwards.
    pub fn toggle(&mut self, id: &str, name: &str, emoji: Option<&str>) -> Result<bool> {
        let mut favorites = self.list()?;

        if favorites.iter().any(|f| f.id == id) {
            favorites.retain(|f| f.id != id);
            save_json(&mut self.storage, FAVORITES_KEY, &favorites)?;
            return Ok(false);
        }

        favorites.push(PageFavorite {
            id: id.to_string(),
            name: name.to_string(),
            emoji: emoji.unwrap_or(DEFAULT_EMOJI).to_string(),
            added_at: Utc::now(),
        });
        save_json(&mut self.storage, FAVORITES_KEY, &favorites)?;
        Ok(true)
    }
}
