//! Remembered view settings and the tool catalog.

pub mod catalog;
pub mod state;

pub use catalog::{builtin_catalog, filter_catalog, CategoryFilter, ToolCard};
pub use state::{ViewState, FILTER_KEY, SEARCH_KEY, SORT_MODE_KEY};
