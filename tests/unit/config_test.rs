//! Tests for configuration loading

use std::fs;
use std::path::Path;

use propbrief::config::{Config, ConfigError};
use serde_json::json;
use tempfile::TempDir;

use crate::common::{fields, record, sources};

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[reconcile.priority]
county = 10
listing = 3
hoa = 1

[enrichment]
enabled = false
timeout_secs = 3
"#,
    );

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.reconcile.priority_of("county"), 10);
    assert!(!config.enrichment.enabled);
    assert_eq!(config.enrichment.timeout_secs, 3);
    assert_eq!(config.enrichment.model, "gpt-3.5-turbo");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[score\ncore_weight = ");
    assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Parse(_))));
}

#[test]
fn test_zero_timeout_is_invalid() {
    let err = Config::from_toml("[enrichment]\ntimeout_secs = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_priority_override_flows_into_reconciler() {
    let config = Config::from_toml("[reconcile.priority]\ncounty = 10\n").unwrap();
    let merged = config.reconciler().reconcile(&sources(&[
        ("county", record(&[("x", json!(1))])),
        ("listing", record(&[("x", json!(2))])),
    ]));
    assert_eq!(merged.provenance["x"], "county");
}

#[test]
fn test_custom_conflict_rule_flows_into_reconciler() {
    let config = Config::from_toml(
        r#"
[[reconcile.conflicts]]
field = "bedrooms"
threshold = 0.1
reason = "Bedroom counts disagree"
"#,
    )
    .unwrap();

    let merged = config.reconciler().reconcile(&sources(&[
        ("county", record(&[("bedrooms", json!(2)), ("square_feet", json!(100))])),
        ("listing", record(&[("bedrooms", json!(4)), ("square_feet", json!(200))])),
    ]));
    assert_eq!(merged.conflicts.len(), 1);
    assert_eq!(merged.conflicts[0].reason, "Bedroom counts disagree");
}

#[test]
fn test_score_settings_flow_into_scorer() {
    let config = Config::from_toml("[score]\ncore_fields = [\"address\"]\ncore_weight = 50\n").unwrap();
    assert_eq!(config.scorer().score(&fields(&[("address", json!("x"))])), 50);
}

#[test]
fn test_data_dir_precedence() {
    let config = Config::from_toml("[storage]\ndata_dir = \"/srv/propbrief\"\n").unwrap();
    assert_eq!(config.data_dir(None), Path::new("/srv/propbrief"));
    assert_eq!(config.data_dir(Some(Path::new("/tmp/x"))), Path::new("/tmp/x"));
}

#[test]
fn test_default_config_renders_and_reloads() {
    let rendered = Config::default().to_toml().unwrap();
    assert!(rendered.contains("[enrichment]"));
    assert_eq!(Config::from_toml(&rendered).unwrap(), Config::default());
}
