//! Configuration schema types for quadbatch.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the batching core expects.

mod batch;
mod matrix;
mod stereo;
mod system;

pub use batch::*;
pub use matrix::*;
pub use stereo::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for quadbatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct QuadbatchConfig {
    pub batch: BatchConfig,
    pub matrix: MatrixConfig,
    pub stereo: StereoConfig,
    pub framebuffer: FramebufferConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
