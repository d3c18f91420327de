//! Render batch sizing configuration.

use serde::{Deserialize, Serialize};

/// Sizing of the default render batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Capacity of each vertex buffer, in quads (valid range: 1-1048576).
    pub buffer_elements: u32,
    /// Number of vertex buffers cycled round-robin (valid range: 1-8).
    pub buffer_count: u32,
    /// Draw calls per batch before a forced flush (valid range: 1-4096).
    pub draw_calls: u32,
    /// Auxiliary texture units bound per batch (valid range: 0-8).
    pub max_texture_units: u32,
    /// Pseudo-depth every flush resets to.
    pub depth_baseline: f32,
    /// Pseudo-depth added after each completed primitive.
    pub depth_step: f32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            buffer_elements: 8192,
            buffer_count: 1,
            draw_calls: 256,
            max_texture_units: 4,
            depth_baseline: -1.0,
            depth_step: 1.0 / 20000.0,
        }
    }
}
