//! Matrix stack configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Maximum push depth (valid range: 1-256).
    pub stack_size: u32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self { stack_size: 32 }
    }
}
