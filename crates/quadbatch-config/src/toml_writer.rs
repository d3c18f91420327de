//! Persist a [`QuadbatchConfig`] as TOML.
//!
//! Files are replaced through a sibling `.tmp` file so a crash mid-write
//! leaves the previous config intact.

use std::path::Path;

use quadbatch_common::ConfigError;

use crate::schema::{QuadbatchConfig, CONFIG_SCHEMA_VERSION};
use crate::toml_loader::default_config_path;

pub fn save_config(config: &QuadbatchConfig) -> Result<(), ConfigError> {
    save_config_to_path(config, &default_config_path()?)
}

/// Serialize `config` and write it to `path`, creating parent directories.
pub fn save_config_to_path(config: &QuadbatchConfig, path: &Path) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))?;
    let contents = format!("# quadbatch configuration (schema {CONFIG_SCHEMA_VERSION})\n\n{body}");

    write_atomic(path, &contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "config saved");
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let io_err = |what: &str, p: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", p.display()))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create directory", dir, e))?;
    }

    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, contents).map_err(|e| io_err("write", &staging, e))?;

    if let Err(e) = std::fs::rename(&staging, path) {
        // Windows refuses to rename over an existing file.
        tracing::warn!(error = %e, "rename failed, writing config in place");
        let _ = std::fs::remove_file(&staging);
        std::fs::write(path, contents).map_err(|e| io_err("write", path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = QuadbatchConfig::default();
        config.batch.buffer_count = 3;
        config.stereo.enabled = true;
        save_config_to_path(&config, &path).unwrap();

        let parsed = crate::toml_loader::load_from_path(&path).unwrap();
        assert_eq!(parsed.batch.buffer_count, 3);
        assert!(parsed.stereo.enabled);
        assert_eq!(parsed.matrix.stack_size, config.matrix.stack_size);
    }

    #[test]
    fn saved_file_starts_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        save_config_to_path(&QuadbatchConfig::default(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# quadbatch configuration"));
        assert!(contents.contains("[batch]"));
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.toml");

        save_config_to_path(&QuadbatchConfig::default(), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
