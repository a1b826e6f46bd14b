//! The result store: saved results plus the comparison selection.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{Result, SolaceError};
use crate::storage::{load_json_or, save_json, KeyValueStorage};

use super::backup::{parse_backup, BackupPayload};
use super::merge::{merge_append, merge_compare_append, replace_compare};
use super::sort::{favorites, sort_results, SortMode};
use super::{unique_id, CompareSelection, IdGenerator, ResultFields, SavedResult, UuidGenerator};

/// Storage key for the JSON array of saved results.
pub const RESULTS_KEY: &str = "solaceToolsResults";

/// Storage key for the JSON array of compared ids.
pub const COMPARE_KEY: &str = "solaceToolsCompare";

/// How an imported backup combines with what is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Keep existing results, remap colliding ids.
    #[default]
    Append,
    /// Discard existing results and selection.
    Replace,
}

impl ImportMode {
    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            _ => Err(format!("unknown import mode: {}", s)),
        }
    }
}

/// Outcome of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records that passed normalization and were stored.
    pub imported: usize,
    /// Records stored under a new id because theirs was taken.
    pub reassigned: usize,
    /// Mode used.
    pub mode: ImportMode,
}

/// Saved results and comparison selection on top of key/value storage.
///
/// Every operation reads the full state from storage and writes it back in
/// full; nothing is cached between calls.
pub struct ResultStore<S> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    clock: fn() -> DateTime<Utc>,
}

impl<S: KeyValueStorage> ResultStore<S> {
    /// Create a store using UUID identifiers and the system clock.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            ids: Box::new(UuidGenerator),
            clock: Utc::now,
        }
    }

    /// Use a different identifier generator.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Use a different clock.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Unwrap the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn now_ms(&self) -> i64 {
        (self.clock)().timestamp_millis()
    }

    /// All saved results in stored order.
    ///
    /// Records that no longer decode are skipped; the rest are kept.
    pub fn load_results(&self) -> Result<Vec<SavedResult>> {
        let items: Vec<Value> = load_json_or(&self.storage, RESULTS_KEY, Vec::new())?;
        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(result) => Some(result),
                Err(e) => {
                    tracing::warn!("Skipping unreadable stored result #{}: {}", index, e);
                    None
                }
            })
            .collect())
    }

    fn save_results(&mut self, results: &[SavedResult]) -> Result<()> {
        tracing::debug!("Saving {} results", results.len());
        save_json(&mut self.storage, RESULTS_KEY, results)
    }

    fn load_raw_compare(&self) -> Result<CompareSelection> {
        let ids: Vec<String> = load_json_or(&self.storage, COMPARE_KEY, Vec::new())?;
        Ok(CompareSelection::from_ids(ids))
    }

    fn save_compare(&mut self, selection: &CompareSelection) -> Result<()> {
        save_json(&mut self.storage, COMPARE_KEY, selection)
    }

    /// The comparison selection, without ids whose result no longer exists.
    pub fn compare_selection(&self) -> Result<CompareSelection> {
        let results = self.load_results()?;
        let mut selection = self.load_raw_compare()?;
        selection.retain_existing(&id_set(&results));
        Ok(selection)
    }

    /// Look up a result by id.
    pub fn get(&self, id: &str) -> Result<SavedResult> {
        self.load_results()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Validate and append a new result.
    pub fn create(&mut self, fields: &ResultFields) -> Result<SavedResult> {
        let fields = fields.validate()?;
        let mut results = self.load_results()?;

        let taken: HashSet<String> = results.iter().map(|r| r.id.clone()).collect();
        let id = unique_id(None, &taken, self.ids.as_mut());
        let result = SavedResult::new(id, fields, self.now_ms());

        results.push(result.clone());
        self.save_results(&results)?;
        tracing::debug!("Created result {}", result.id);
        Ok(result)
    }

    /// Validate and overwrite the editable fields of an existing result.
    pub fn update(&mut self, id: &str, fields: &ResultFields) -> Result<SavedResult> {
        let fields = fields.validate()?;
        let mut results = self.load_results()?;

        let target = results
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        target.apply(fields);
        let updated = target.clone();

        self.save_results(&results)?;
        Ok(updated)
    }

    /// Remove a result and deselect it. Returns whether a result was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut results = self.load_results()?;
        let before = results.len();
        results.retain(|r| r.id != id);
        let removed = results.len() != before;

        let mut selection = self.compare_selection()?;
        selection.remove(id);

        self.save_results(&results)?;
        self.save_compare(&selection)?;
        Ok(removed)
    }

    /// Flip the favorite flag. Returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let mut results = self.load_results()?;
        let target = results
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        target.is_favorite = !target.is_favorite;
        let state = target.is_favorite;

        self.save_results(&results)?;
        Ok(state)
    }

    /// Select or deselect a result for comparison. Returns whether it is
    /// now selected.
    pub fn toggle_compare(&mut self, id: &str) -> Result<bool> {
        let results = self.load_results()?;
        if !results.iter().any(|r| r.id == id) {
            return Err(not_found(id));
        }

        let mut selection = self.load_raw_compare()?;
        selection.retain_existing(&id_set(&results));
        let selected = selection.toggle(id);

        self.save_compare(&selection)?;
        Ok(selected)
    }

    /// Deselect everything.
    pub fn clear_compare(&mut self) -> Result<()> {
        self.save_compare(&CompareSelection::new())
    }

    /// All results in the given order.
    pub fn list(&self, mode: SortMode) -> Result<Vec<SavedResult>> {
        let mut results = self.load_results()?;
        sort_results(&mut results, mode);
        Ok(results)
    }

    /// Favorite results, newest first.
    pub fn favorites(&self) -> Result<Vec<SavedResult>> {
        Ok(favorites(&self.load_results()?))
    }

    /// The selected results, in selection order.
    pub fn compare_targets(&self) -> Result<Vec<SavedResult>> {
        let results = self.load_results()?;
        let selection = self.compare_selection()?;
        Ok(selection
            .ids()
            .iter()
            .filter_map(|id| results.iter().find(|r| &r.id == id).cloned())
            .collect())
    }

    /// Snapshot the current state as a backup payload.
    pub fn export_backup(&self) -> Result<BackupPayload> {
        let results = self.load_results()?;
        let selection = self.compare_selection()?;
        Ok(BackupPayload::new(results, &selection, (self.clock)()))
    }

    /// Import backup text.
    ///
    /// Nothing is written when parsing or validation fails.
    pub fn import_backup(&mut self, text: &str, mode: ImportMode) -> Result<ImportSummary> {
        let now_ms = self.now_ms();
        let parsed = parse_backup(text, self.ids.as_mut(), now_ms)?;
        let imported = parsed.results.len();

        let summary = match mode {
            ImportMode::Replace => {
                let selection = replace_compare(&parsed.compare_ids, &parsed.results);
                self.save_results(&parsed.results)?;
                self.save_compare(&selection)?;
                ImportSummary {
                    imported,
                    reassigned: 0,
                    mode,
                }
            }
            ImportMode::Append => {
                let existing = self.load_results()?;
                let current = self.compare_selection()?;
                let (merged, id_map) = merge_append(existing, parsed.results, self.ids.as_mut());
                let reassigned = id_map.iter().filter(|(from, to)| from != to).count();
                let selection = merge_compare_append(&current, &parsed.compare_ids, &id_map);

                self.save_results(&merged)?;
                self.save_compare(&selection)?;
                ImportSummary {
                    imported,
                    reassigned,
                    mode,
                }
            }
        };

        tracing::info!(
            "Imported {} results ({} mode, {} reassigned)",
            summary.imported,
            summary.mode,
            summary.reassigned
        );
        Ok(summary)
    }
}

fn id_set(results: &[SavedResult]) -> HashSet<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

fn not_found(id: &str) -> SolaceError {
    SolaceError::NotFound { id: id.to_string() }
}
