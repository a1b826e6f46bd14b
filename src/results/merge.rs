//! Pure merge rules for importing a backup.
//!
//! Nothing here touches storage, so the id remapping can be tested in
//! isolation from the store.

use std::collections::{HashMap, HashSet};

use super::{unique_id, CompareSelection, IdGenerator, SavedResult};

/// Original imported id → id it was stored under.
pub type IdMap = HashMap<String, String>;

/// Append `imported` after `existing`, giving every imported record whose id
/// is already taken (by an existing record or an earlier imported one) a
/// freshly generated id.
pub fn merge_append(
    existing: Vec<SavedResult>,
    imported: Vec<SavedResult>,
    ids: &mut dyn IdGenerator,
) -> (Vec<SavedResult>, IdMap) {
    let mut taken: HashSet<String> = existing.iter().map(|r| r.id.clone()).collect();
    let mut id_map = IdMap::new();
    let mut merged = existing;
    merged.reserve(imported.len());

    for mut item in imported {
        let next = unique_id(Some(&item.id), &taken, ids);
        if next != item.id {
            tracing::debug!("Imported id '{}' collides, stored as '{}'", item.id, next);
        }
        taken.insert(next.clone());
        id_map.insert(std::mem::replace(&mut item.id, next.clone()), next);
        merged.push(item);
    }

    (merged, id_map)
}

/// Translate the imported comparison ids through `id_map` and append them
/// to the current selection, keeping the newest entries.
pub fn merge_compare_append(
    current: &CompareSelection,
    imported_ids: &[String],
    id_map: &IdMap,
) -> CompareSelection {
    let mut merged = current.clone();
    merged.merge_newest(
        imported_ids
            .iter()
            .filter_map(|id| id_map.get(id))
            .cloned(),
    );
    merged
}

/// Selection after a replace import: imported ids that name a new record,
/// first entries up to capacity.
pub fn replace_compare(imported_ids: &[String], results: &[SavedResult]) -> CompareSelection {
    let valid: HashSet<&str> = results.iter().map(|r| r.id.as_str()).collect();
    let ids: Vec<String> = imported_ids
        .iter()
        .filter(|id| valid.contains(id.as_str()))
        .cloned()
        .collect();
    CompareSelection::from_ids(ids)
}
