//! Configuration loading.
//!
//! Settings come from YAML files merged in this order (later wins):
//! 1. User global config (`~/.solace-tools/config.yml`)
//! 2. An explicit `--config` file
//!
//! The data directory can additionally be overridden with
//! `SOLACE_TOOLS_DATA_DIR` or `--data-dir`.
//!
//! # Example
//!
//! ```
//! use solace_tools::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("analytics:\n  enabled: false\n", Path::new("inline")).unwrap();
//! assert!(!config.analytics.enabled);
//! assert_eq!(config.storage_file, "storage.json");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use schema::{default_data_dir, AnalyticsConfig, OutputConfig, ToolsConfig};
