use std::io::Write;

use tempfile::NamedTempFile;

use super::StoreConfig;

fn toml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("should succeed");
    file.write_all(content.as_bytes()).expect("should succeed");
    file
}

#[test]
fn test_default_config() {
    let config = StoreConfig::default();
    assert_eq!(config.stable_capacity, 16);
    assert_eq!(config.max_entries_per_read, 64);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = StoreConfig::load(None).expect("should succeed");
    assert_eq!(config, StoreConfig::default());
}

#[test]
fn test_load_overrides_from_file() {
    let file = toml_file("stable_capacity = 4\nmax_entries_per_read = 500\n");
    let path = file.path().to_str().expect("utf8 path");

    let config = StoreConfig::load(Some(path)).expect("should succeed");
    assert_eq!(config.stable_capacity, 4);
    assert_eq!(config.max_entries_per_read, 500);
}

#[test]
fn test_load_partial_file_keeps_other_defaults() {
    let file = toml_file("max_entries_per_read = 8\n");
    let path = file.path().to_str().expect("utf8 path");

    let config = StoreConfig::load(Some(path)).expect("should succeed");
    assert_eq!(config.stable_capacity, 16);
    assert_eq!(config.max_entries_per_read, 8);
}

#[test]
fn test_load_rejects_zero_read_limit() {
    let file = toml_file("max_entries_per_read = 0\n");
    let path = file.path().to_str().expect("utf8 path");

    let err = StoreConfig::load(Some(path)).unwrap_err();
    assert!(err.to_string().contains("max_entries_per_read"));
}

#[test]
fn test_load_missing_file_fails() {
    assert!(StoreConfig::load(Some("/nonexistent/raft-memstore.toml")).is_err());
}

#[test]
fn test_validation() {
    let mut config = StoreConfig::default();
    config.max_entries_per_read = 0;
    assert!(config.validate().is_err());

    config.max_entries_per_read = 1;
    assert!(config.validate().is_ok());
}
