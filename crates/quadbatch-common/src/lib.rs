pub mod errors;
pub mod types;

pub use errors::{BackendError, ConfigError, QuadbatchError};
pub use types::{BufferId, Color, ShaderId, TextureId, Viewport};

pub type Result<T> = std::result::Result<T, QuadbatchError>;
