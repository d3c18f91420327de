//! quadbatch configuration system.
//!
//! Provides TOML-based configuration for batch sizing, the matrix stack,
//! stereo rendering and logging, with full range validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quadbatch_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{QuadbatchConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{save_config, save_config_to_path};

use quadbatch_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// file if none exists.
pub fn load_config() -> Result<QuadbatchConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<QuadbatchConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &QuadbatchConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = QuadbatchConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"batch\""));
        assert!(json.contains("\"matrix\""));
        assert!(json.contains("\"stereo\""));
        assert!(json.contains("\"framebuffer\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = QuadbatchConfig::default();
        let json = config_to_json(&config);
        let parsed: QuadbatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.batch.buffer_elements, 8192);
        assert_eq!(parsed.matrix.stack_size, 32);
        assert!(!parsed.stereo.enabled);
    }

    #[test]
    fn load_config_from_missing_path_is_not_found() {
        let err = load_config_from(Path::new("/tmp/quadbatch_missing_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[batch]\nbuffer_count = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
