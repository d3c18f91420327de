//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_quadbatch_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, quadbatch_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[batch]
buffer_elements = 512
buffer_count = 2

[matrix]
stack_size = 16
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.batch.buffer_elements, 512);
    assert_eq!(config.batch.buffer_count, 2);
    assert_eq!(config.matrix.stack_size, 16);
    // Defaults preserved
    assert_eq!(config.batch.draw_calls, 256);
    assert!(!config.stereo.enabled);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, quadbatch_common::ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_still_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[batch]\nbuffer_count = 99\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.batch.buffer_count, 99);
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    create_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[batch]"));
    assert!(content.contains("[stereo]"));

    // The commented template parses to defaults.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.batch.buffer_elements, 8192);
}

#[test]
fn default_config_path_ends_with_quadbatch() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("quadbatch/config.toml"));
    }
}
