//! The comparison selection: at most two result ids, oldest evicted first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum number of results shown side by side.
pub const COMPARE_CAPACITY: usize = 2;

/// Ordered ids of the results chosen for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompareSelection {
    ids: Vec<String>,
}

impl CompareSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, keeping the first entries up to capacity.
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut ids = dedup(ids);
        ids.truncate(COMPARE_CAPACITY);
        Self { ids }
    }

    /// The selected ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check if `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Deselect `id` if present, otherwise select it and evict the oldest
    /// entries beyond capacity. Returns whether `id` is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            return false;
        }
        self.ids.push(id.to_string());
        self.keep_newest();
        true
    }

    /// Deselect `id`. Returns whether it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    /// Drop every id not in `existing`.
    pub fn retain_existing(&mut self, existing: &HashSet<&str>) {
        self.ids.retain(|id| existing.contains(id.as_str()));
    }

    /// Append new ids without duplicates, then keep the newest entries.
    pub fn merge_newest(&mut self, ids: impl IntoIterator<Item = String>) {
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
        self.keep_newest();
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    fn keep_newest(&mut self) {
        if self.ids.len() > COMPARE_CAPACITY {
            let excess = self.ids.len() - COMPARE_CAPACITY;
            self.ids.drain(..excess);
        }
    }
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(ids: &[&str]) -> CompareSelection {
        CompareSelection::from_ids(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = CompareSelection::new();
        assert!(sel.toggle("a"));
        assert!(sel.contains("a"));
        assert!(!sel.toggle("a"));
        assert!(sel.is_empty());
    }

    #[test]
    fn third_toggle_evicts_oldest() {
        let mut sel = CompareSelection::new();
        sel.toggle("a");
        sel.toggle("b");
        sel.toggle("c");

        assert_eq!(sel.ids(), &["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut sel = CompareSelection::new();
        for id in ["a", "b", "c", "d", "e"] {
            sel.toggle(id);
            assert!(sel.len() <= COMPARE_CAPACITY);
        }
        assert_eq!(sel.ids(), &["d".to_string(), "e".to_string()]);
    }

    #[test]
    fn from_ids_keeps_first_two() {
        let sel = selection(&["a", "b", "c"]);
        assert_eq!(sel.ids(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn from_ids_drops_duplicates() {
        let sel = selection(&["a", "a", "b"]);
        assert_eq!(sel.ids(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn retain_existing_drops_stale() {
        let mut sel = selection(&["a", "gone"]);
        let existing: HashSet<&str> = ["a", "b"].into_iter().collect();
        sel.retain_existing(&existing);
        assert_eq!(sel.ids(), &["a".to_string()]);
    }

    #[test]
    fn merge_newest_skips_duplicates_and_truncates() {
        let mut sel = selection(&["a", "b"]);
        sel.merge_newest(vec!["b".to_string(), "c".to_string()]);
        assert_eq!(sel.ids(), &["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&selection(&["a", "b"])).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
