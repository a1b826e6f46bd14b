//! Solace Tools - saved before/after results for the Solace portfolio site.
//!
//! Users of the site's tools page save results (a title, a category, a
//! before and an after image, and share text). This crate keeps those
//! results in a local key/value store and adds favorites, a two-slot
//! comparison, sorting, the tool catalog filter, and JSON backups.
//!
//! # Modules
//!
//! - [`analytics`] - Local event log with funnel classification
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`context`] - Per-invocation storage and analytics
//! - [`error`] - Error types and result aliases
//! - [`pages`] - Site-wide favorite pages and visit history
//! - [`results`] - Saved results, comparison, sorting, and backups
//! - [`storage`] - Key/value storage backends
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`view`] - Tool catalog and remembered view settings
//!
//! # Example
//!
//! ```
//! use solace_tools::results::{ResultFields, ResultStore, SortMode};
//! use solace_tools::storage::MemoryStorage;
//!
//! let mut store = ResultStore::new(MemoryStorage::new());
//! let saved = store
//!     .create(&ResultFields::new("Sunset palette", "Warm tones for the hero"))
//!     .unwrap();
//! store.toggle_favorite(&saved.id).unwrap();
//!
//! let listed = store.list(SortMode::Favorite).unwrap();
//! assert!(listed[0].is_favorite);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod pages;
pub mod results;
pub mod storage;
pub mod ui;
pub mod view;

pub use error::{Result, SolaceError};
