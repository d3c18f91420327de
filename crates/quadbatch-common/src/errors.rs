use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by a graphics backend while creating resources.
///
/// The batching context never lets these escape its immediate-mode API;
/// it logs them and falls back to the backend's default resources.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("texture creation failed: {0}")]
    Texture(String),

    #[error("shader creation failed: {0}")]
    Shader(String),

    #[error("vertex buffer creation failed: {0}")]
    Buffer(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    Device(String),

    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QuadbatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("batch.buffer_count = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: batch.buffer_count = 0"
        );
    }

    #[test]
    fn backend_error_display() {
        let err = BackendError::Texture("zero size".into());
        assert_eq!(err.to_string(), "texture creation failed: zero size");

        let err = BackendError::Shader("missing vs_main".into());
        assert_eq!(err.to_string(), "shader creation failed: missing vs_main");

        let err = BackendError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");

        let err = BackendError::UnsupportedFormat("R32".into());
        assert_eq!(err.to_string(), "unsupported pixel format: R32");
    }

    #[test]
    fn quadbatch_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: QuadbatchError = config_err.into();
        assert!(matches!(err, QuadbatchError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn quadbatch_error_from_backend() {
        let err: QuadbatchError = BackendError::Device("lost".into()).into();
        assert!(matches!(err, QuadbatchError::Backend(_)));
        assert_eq!(err.to_string(), "device error: lost");
    }

    #[test]
    fn quadbatch_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: QuadbatchError = io_err.into();
        assert!(matches!(err, QuadbatchError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
