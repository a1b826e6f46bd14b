//! Recently visited pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{load_json_or, save_json, KeyValueStorage, ScopedStorage};

/// Unscoped key of the visit history.
pub const HISTORY_KEY: &str = "visitHistory";

/// Number of visits kept.
pub const HISTORY_LIMIT: usize = 50;

const DEFAULT_EMOJI: &str = "📄";

/// One page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVisit {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub visited_at: DateTime<Utc>,
}

/// Visit history, most recent first, one entry per url.
pub struct VisitHistory<S> {
    storage: ScopedStorage<S>,
}

impl<S: KeyValueStorage> VisitHistory<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: ScopedStorage::new(storage),
        }
    }

    pub fn list(&self) -> Result<Vec<PageVisit>> {
        load_json_or(&self.storage, HISTORY_KEY, Vec::new())
    }

    /// Record a visit at the front, dropping any earlier visit to the same
    /// url and anything beyond [`HISTORY_LIMIT`].
    pub fn record(&mut self, url: &str, name: &str, emoji: Option<&str>) -> Result<()> {
        let mut visits = self.list()?;
        visits.retain(|v| v.url != url);
        visits.insert(
            0,
            PageVisit {
                url: url.to_string(),
                name: name.to_string(),
                emoji: emoji.unwrap_or(DEFAULT_EMOJI).to_string(),
                visited_at: Utc::now(),
            },
        );
        visits.truncate(HISTORY_LIMIT);
        save_json(&mut self.storage, HISTORY_KEY, &visits)
    }

    /// Forget every visit.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(HISTORY_KEY)
    }
}
