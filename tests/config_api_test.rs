//! Integration tests for config module public API.

use solace_tools::config::{load_config, load_config_file, ConfigPaths, ToolsConfig};
use solace_tools::ui::OutputMode;
use solace_tools::SolaceError;
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = ToolsConfig::default();
    assert!(config.analytics.enabled);
    assert_eq!(config.output.mode, OutputMode::Normal);
}

#[test]
fn explicit_config_overrides_global() {
    let temp = TempDir::new().unwrap();
    let global_dir = temp.path().join(".solace-tools");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.yml"),
        "storage_file: global.json\nanalytics:\n  enabled: false\n",
    )
    .unwrap();

    let explicit = temp.path().join("local.yml");
    fs::write(&explicit, "storage_file: local.json\noutput:\n  mode: quiet\n").unwrap();

    let paths = ConfigPaths::discover_in(Some(temp.path()), Some(&explicit));
    let config = load_config(&paths).unwrap();

    assert_eq!(config.storage_file, "local.json");
    assert!(!config.analytics.enabled);
    assert_eq!(config.output.mode, OutputMode::Quiet);
}

#[test]
fn data_dir_override_moves_every_file() {
    let temp = TempDir::new().unwrap();
    let config = ToolsConfig::default().with_data_dir(Some(temp.path().to_path_buf()));

    assert_eq!(config.storage_path(), temp.path().join("storage.json"));
    assert_eq!(config.analytics_path(), temp.path().join("analytics.jsonl"));
}

#[test]
fn invalid_yaml_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.yml");
    fs::write(&path, "analytics: [unclosed").unwrap();

    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, SolaceError::ConfigParseError { .. }));
    assert!(err.to_string().contains("bad.yml"));
}
