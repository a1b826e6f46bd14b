//! Remembered sort mode, catalog filter, and search text.

use crate::error::Result;
use crate::results::{SortMode, COMPARE_KEY};
use crate::storage::KeyValueStorage;

use super::CategoryFilter;

/// Storage key for the results sort mode.
pub const SORT_MODE_KEY: &str = "solaceToolsSortMode";

/// Storage key for the catalog category filter.
pub const FILTER_KEY: &str = "solaceToolsFilter";

/// Storage key for the catalog search text.
pub const SEARCH_KEY: &str = "solaceToolsSearch";

/// View settings persisted between runs.
pub struct ViewState<S> {
    storage: S,
}

impl<S: KeyValueStorage> ViewState<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Remembered sort mode; anything other than `favorite` reads as newest.
    pub fn sort_mode(&self) -> Result<SortMode> {
        let stored = self.storage.get(SORT_MODE_KEY)?;
        Ok(SortMode::from_stored(stored.as_deref()))
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) -> Result<()> {
        self.storage.set(SORT_MODE_KEY, mode.as_str())
    }

    /// Remembered category filter; unknown values read as `all`.
    pub fn filter(&self) -> Result<CategoryFilter> {
        let stored = self.storage.get(FILTER_KEY)?;
        Ok(CategoryFilter::from_stored(stored.as_deref()))
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) -> Result<()> {
        self.storage.set(FILTER_KEY, filter.as_str())
    }

    /// Remembered search text, untrimmed.
    pub fn search(&self) -> Result<String> {
        Ok(self.storage.get(SEARCH_KEY)?.unwrap_or_default())
    }

    pub fn set_search(&mut self, search: &str) -> Result<()> {
        self.storage.set(SEARCH_KEY, search)
    }

    /// Forget the view settings and the comparison selection.
    ///
    /// Saved results and their favorite flags are left alone.
    pub fn reset(&mut self) -> Result<()> {
        for key in [SORT_MODE_KEY, FILTER_KEY, SEARCH_KEY, COMPARE_KEY] {
            self.storage.remove(key)?;
        }
        tracing::debug!("View state reset");
        Ok(())
    }
}
