// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use splitshot::config::{self, Config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::from_path(&dir.path().join("config.json")).unwrap();

    assert!(cfg.api_key.is_none());
    assert_eq!(cfg.default_currency, "INR");
    assert!(!cfg.debug);
}

#[test]
fn file_fields_are_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"api_key": "k-123", "default_currency": "USD", "debug": true}"#,
    )
    .unwrap();

    let cfg = config::from_path(&path).unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("k-123"));
    assert_eq!(cfg.default_currency, "USD");
    assert!(cfg.debug);
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_key": "k-123"}"#).unwrap();

    let cfg = config::from_path(&path).unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("k-123"));
    assert_eq!(cfg.default_currency, "INR");
    assert!(!cfg.debug);
}

#[test]
fn unknown_fields_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_key": "k-123", "future_knob": 1}"#).unwrap();

    let cfg = config::from_path(&path).unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("k-123"));
}

#[test]
fn invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    let err = config::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config at"));
}

#[test]
fn api_key_error_names_the_env_var() {
    let cfg = Config::default();
    let err = cfg.api_key().unwrap_err();
    assert!(err.to_string().contains(config::API_KEY_ENV));
}
