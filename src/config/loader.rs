//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::ToolsConfig;
use crate::error::{Result, SolaceError};

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.solace-tools/config.yml
    pub user_global: Option<PathBuf>,

    /// Config passed with `--config`. Must exist.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files, looking for the global one in the user's home.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self::discover_in(dirs::home_dir().as_deref(), explicit)
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_in(home: Option<&Path>, explicit: Option<&Path>) -> Self {
        let user_global = home
            .map(|h| h.join(".solace-tools").join("config.yml"))
            .filter(|p| p.exists());

        Self {
            user_global,
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.explicit.iter()).collect()
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ToolsConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a config. Empty content gives the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ToolsConfig> {
    if content.trim().is_empty() {
        return Ok(ToolsConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SolaceError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SolaceError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SolaceError::Io(e)
        }
    })
}

fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(&content).map_err(|e| SolaceError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered config file.
///
/// With no config files at all, the defaults are returned.
pub fn load_config(paths: &ConfigPaths) -> Result<ToolsConfig> {
    let mut values = Vec::new();
    for path in paths.all() {
        tracing::debug!("Loading config from {:?}", path);
        values.push(load_config_value(path)?);
    }

    if values.is_empty() {
        return Ok(ToolsConfig::default());
    }

    let source = paths
        .all()
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();

    serde_yaml::from_value(merge_configs(&values)).map_err(|e| SolaceError::ConfigParseError {
        path: source,
        message: format!("Failed to parse merged config: {}", e),
    })
}
