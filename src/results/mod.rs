//! Saved before/after results.
//!
//! Results are stored as a JSON array under a single key, with the
//! comparison selection (at most two ids) stored beside them.
//!
//! # Modules
//!
//! - [`entry`]: the record and its validated input
//! - [`ids`]: identifier generation
//! - [`compare`]: the comparison selection
//! - [`sort`]: list ordering
//! - [`backup`]: backup payload and lenient parsing
//! - [`merge`]: combining imported backups with stored data
//! - [`store`]: the storage-backed store
//! - [`action`]: per-result action dispatch
//! - [`image`]: saving a result's image

pub mod action;
pub mod backup;
pub mod compare;
pub mod entry;
pub mod ids;
pub mod image;
pub mod merge;
pub mod sort;
pub mod store;

pub use action::{ActionOutcome, ResultAction};
pub use backup::{
    backup_filename, normalize_results, parse_backup, BackupPayload, ParsedBackup, BACKUP_VERSION,
};
pub use compare::{CompareSelection, COMPARE_CAPACITY};
pub use entry::{Category, ResultFields, SavedResult, ValidFields};
pub use ids::{unique_id, IdGenerator, SequenceGenerator, UuidGenerator};
pub use image::ImageFetcher;
pub use merge::{merge_append, merge_compare_append, replace_compare, IdMap};
pub use sort::{favorites, sort_results, SortMode};
pub use store::{ImportMode, ImportSummary, ResultStore, COMPARE_KEY, RESULTS_KEY};
