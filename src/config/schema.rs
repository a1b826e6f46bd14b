//! Configuration schema.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::OutputMode;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Directory holding the storage file and analytics log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Storage file name, relative to the data directory.
    pub storage_file: String,

    pub analytics: AnalyticsConfig,

    pub output: OutputConfig,
}

/// Local analytics log settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    /// Log file name, relative to the data directory.
    pub log_file: String,
}

/// Terminal output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub mode: OutputMode,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_file: "storage.json".to_string(),
            analytics: AnalyticsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: "analytics.jsonl".to_string(),
        }
    }
}

/// Platform data directory for solace-tools.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("solace-tools"))
        .unwrap_or_else(|| PathBuf::from(".solace-tools"))
}

impl ToolsConfig {
    /// Replace the data directory when an override is given.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    /// The configured data directory, or the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Path of the storage file.
    pub fn storage_path(&self) -> PathBuf {
        resolve(&self.data_dir(), &self.storage_file)
    }

    /// Path of the analytics log.
    pub fn analytics_path(&self) -> PathBuf {
        resolve(&self.data_dir(), &self.analytics.log_file)
    }
}

fn resolve(dir: &Path, file: &str) -> PathBuf {
    // Absolute paths replace `dir` entirely.
    dir.join(file)
}
