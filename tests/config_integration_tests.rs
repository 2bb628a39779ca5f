//! Tests for config file loading and CLI overrides
use clap::Parser;
use doctree_validator::config::{load_options, Args, Config, OutputFormat};
use doctree_validator::ValidatorOptions;
use serde_json::json;
use std::fs;

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("doctree.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_explicit_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(
        &dir,
        "[validator]\nmax_depth = 4\ndescend_into_list_items = false\n",
    );

    let args = Args::parse_from(["doctree-check", "--config", path.to_str().unwrap()]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.config_file.as_deref(), Some(path.as_path()));
    assert_eq!(config.options.max_depth, 4);
    assert!(!config.options.descend_into_list_items);
    assert!(config.options.strict_dimensions);
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.inputs.is_empty());
}

#[test]
fn test_cli_flags_override_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(&dir, "[validator]\nmax_depth = 4\n");

    let args = Args::parse_from([
        "doctree-check",
        "--config",
        path.to_str().unwrap(),
        "--max-depth",
        "100",
        "--lenient-dimensions",
        "--allow-unrecognized",
        "--skip-list-items",
        "doc.json",
    ]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(
        config.options,
        ValidatorOptions {
            max_depth: 100,
            strict_dimensions: false,
            descend_into_list_items: false,
            allow_unrecognized_elements: true,
        }
    );
    assert_eq!(config.inputs.len(), 1);
}

#[test]
fn test_config_options_reach_the_validator() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(&dir, "[validator]\nallow_unrecognized_elements = true\n");

    let args = Args::parse_from(["doctree-check", "--config", path.to_str().unwrap()]);
    let validator = Config::from_args(args).expect("create config").validator();

    let document = json!([{"type": "callout", "children": [{"text": "note"}]}]);
    assert!(validator.validate_value(&document).is_valid());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope.toml");

    let err = load_options(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_invalid_config_value_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(&dir, "[validator]\nmax_depth = \"deep\"\n");

    let args = Args::parse_from(["doctree-check", "--config", path.to_str().unwrap()]);
    let err = Config::from_args(args).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}
