use std::fs;

use crate::{CatalogError, DuplicatePolicy, LoaderConfig, MalformedPolicy};

#[test]
fn test_defaults() {
    let config = LoaderConfig::default();
    assert_eq!(config.extension, "xml");
    assert_eq!(config.malformed, MalformedPolicy::Skip);
    assert_eq!(config.duplicates, DuplicatePolicy::KeepFirst);
}

#[test]
fn test_partial_json_fills_defaults() {
    let config: LoaderConfig = serde_json::from_str(r#"{ "malformed": "abort" }"#).unwrap();
    assert_eq!(config.malformed, MalformedPolicy::Abort);
    assert_eq!(config.extension, "xml");
    assert_eq!(config.duplicates, DuplicatePolicy::KeepFirst);
}

#[test]
fn test_json_round_trip() {
    let config = LoaderConfig::default()
        .with_extension("oec")
        .with_duplicates(DuplicatePolicy::Reject);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""duplicates":"reject""#));
    assert_eq!(serde_json::from_str::<LoaderConfig>(&json).unwrap(), config);
}

#[test]
fn test_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.json");
    fs::write(&path, r#"{ "extension": "oec", "duplicates": "reject" }"#).unwrap();

    let config = LoaderConfig::from_json_file(&path).unwrap();
    assert_eq!(config.extension, "oec");
    assert_eq!(config.duplicates, DuplicatePolicy::Reject);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loader.json");
    fs::write(&path, r#"{ "extention": "xml" }"#).unwrap();

    let err = LoaderConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Config { .. }));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LoaderConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
