// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件读取、默认值与校验
// ==========================================

use reliable_inventory::config::{AppConfig, ConfigError, ConfigManager};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file.flush().expect("Failed to flush config");
    file
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = ConfigManager::load_file(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_keeps_defaults_for_other_keys() {
    let file = write_config(r#"{ "alertWindowDays": 14, "snapshotPath": "/srv/snap.json" }"#);

    let config = ConfigManager::load_file(file.path()).unwrap();
    assert_eq!(config.alert_window_days, 14);
    assert_eq!(config.snapshot_path, PathBuf::from("/srv/snap.json"));
    assert_eq!(config.locale, "zh-CN");
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_malformed_file_is_reported() {
    let file = write_config("alertWindowDays = 14");
    assert!(matches!(
        ConfigManager::load_file(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_validation_rejects_bad_values() {
    let file = write_config(r#"{ "alertWindowDays": 0 }"#);
    let config = ConfigManager::load_file(file.path()).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

    let config = AppConfig {
        locale: "fr".to_string(),
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_default_config_path_is_namespaced() {
    if let Some(path) = ConfigManager::default_config_path() {
        assert!(path.ends_with("reliable-inventory/config.json"));
    }
}
