//! Runtime sizing for a [`BatchContext`](crate::BatchContext).

use quadbatch_config::QuadbatchConfig;

/// Everything the batching core needs from configuration, detached from
/// file loading.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    /// Quads per vertex buffer.
    pub buffer_elements: usize,
    pub buffer_count: usize,
    pub draw_calls: usize,
    pub max_texture_units: usize,
    pub depth_baseline: f32,
    pub depth_step: f32,
    pub stack_size: usize,
    pub stereo_enabled: bool,
    pub eye_separation: f32,
    pub framebuffer_width: u32,
    pub framebuffer_height: u32,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self::from(&QuadbatchConfig::default())
    }
}

impl From<&QuadbatchConfig> for BatchSettings {
    fn from(config: &QuadbatchConfig) -> Self {
        Self {
            buffer_elements: config.batch.buffer_elements as usize,
            buffer_count: config.batch.buffer_count as usize,
            draw_calls: config.batch.draw_calls as usize,
            max_texture_units: config.batch.max_texture_units as usize,
            depth_baseline: config.batch.depth_baseline,
            depth_step: config.batch.depth_step,
            stack_size: config.matrix.stack_size as usize,
            stereo_enabled: config.stereo.enabled,
            eye_separation: config.stereo.eye_separation,
            framebuffer_width: config.framebuffer.width,
            framebuffer_height: config.framebuffer.height,
        }
    }
}

impl BatchSettings {
    /// Small batch, handy for exercising flush paths.
    pub fn with_buffer(mut self, elements: usize, count: usize) -> Self {
        self.buffer_elements = elements;
        self.buffer_count = count;
        self
    }

    pub fn with_draw_calls(mut self, draw_calls: usize) -> Self {
        self.draw_calls = draw_calls;
        self
    }
}
