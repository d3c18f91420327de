//! Texture, shader, blend, batch and stereo state on the context.
//!
//! None of these may change while a primitive span is open.

use quadbatch_common::{ShaderId, TextureId, Viewport};

use super::{allocate_batch, release_batch, BatchContext, SubmissionState};
use crate::backend::{BlendMode, GraphicsBackend, ShaderSource};
use crate::batch::RenderBatch;
use crate::matrix::Mat4;
use crate::pixel::PixelFormat;

impl<B: GraphicsBackend> BatchContext<B> {
    // -- textures --

    /// Create a texture. Returns [`TextureId::INVALID`] on failure.
    pub fn load_texture(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> TextureId {
        match self.backend.load_texture(pixels, width, height, format) {
            Ok(id) => {
                tracing::debug!(%id, width, height, ?format, "texture loaded");
                id
            }
            Err(e) => {
                tracing::error!(width, height, ?format, "texture load failed: {e}");
                TextureId::INVALID
            }
        }
    }

    /// Release a texture. Pending draws that use it are flushed first and
    /// the default texture takes its place in the current state.
    pub fn unload_texture(&mut self, id: TextureId) {
        if !id.is_valid() || id == self.default_texture {
            tracing::warn!(%id, "refusing to unload invalid or default texture");
            return;
        }

        if self.current_texture == id {
            self.current_texture = self.default_texture;
        }
        let in_use = self
            .active_batch()
            .draws()
            .iter()
            .any(|call| call.texture == id && !call.is_empty());
        if in_use {
            self.flush();
        }

        let default = self.default_texture;
        let call = self.active_batch_mut().open_call_mut();
        if call.texture == id {
            call.texture = default;
        }
        self.aux_textures.retain(|t| *t != id);
        self.backend.unload_texture(id);
    }

    /// Bind `id` for subsequent primitives. Invalid ids select the default
    /// texture.
    pub fn enable_texture(&mut self, id: TextureId) {
        if self.state != SubmissionState::Idle {
            self.reject("enable_texture");
            return;
        }

        let texture = if id.is_valid() {
            id
        } else {
            self.default_texture
        };
        self.current_texture = texture;
        let mode = self.active_batch().open_call().mode;
        self.switch_draw_state(mode, texture);
    }

    /// Return to the default texture, flushing first if the active buffer
    /// is full.
    pub fn disable_texture(&mut self) {
        if self.state != SubmissionState::Idle {
            self.reject("disable_texture");
            return;
        }

        let buffer = self.active_batch().active_buffer();
        if buffer.vertex_count() >= buffer.capacity() {
            self.flush();
        }
        self.enable_texture(self.default_texture);
    }

    /// Register an auxiliary texture for the next flush and return the
    /// sampler unit it will be bound to (1-based).
    pub fn register_aux_texture(&mut self, id: TextureId) -> Option<u32> {
        if !id.is_valid() {
            return None;
        }
        if let Some(i) = self.aux_textures.iter().position(|t| *t == id) {
            return Some(i as u32 + 1);
        }
        if self.aux_textures.len() >= self.settings.max_texture_units {
            tracing::warn!(
                max = self.settings.max_texture_units,
                %id,
                "no free auxiliary texture unit"
            );
            return None;
        }
        self.aux_textures.push(id);
        Some(self.aux_textures.len() as u32)
    }

    // -- blending and shaders --

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        if self.state != SubmissionState::Idle {
            self.reject("set_blend_mode");
            return;
        }
        if mode != self.blend_mode {
            self.flush();
            self.blend_mode = mode;
        }
    }

    /// Compile a shader. Falls back to the default shader on failure.
    pub fn load_shader(&mut self, source: &ShaderSource) -> ShaderId {
        match self.backend.load_shader(source) {
            Ok(id) => {
                tracing::debug!(%id, label = %source.label, "shader loaded");
                id
            }
            Err(e) => {
                tracing::error!(label = %source.label, "shader load failed: {e}");
                self.default_shader
            }
        }
    }

    /// Use `id` for subsequent flushes. Invalid ids select the default
    /// shader.
    pub fn set_shader(&mut self, id: ShaderId) {
        if self.state != SubmissionState::Idle {
            self.reject("set_shader");
            return;
        }

        let shader = if id.is_valid() {
            id
        } else {
            self.default_shader
        };
        if shader != self.current_shader {
            self.flush();
            self.current_shader = shader;
        }
    }

    pub fn unload_shader(&mut self, id: ShaderId) {
        if !id.is_valid() || id == self.default_shader {
            tracing::warn!(%id, "refusing to unload invalid or default shader");
            return;
        }
        if self.current_shader == id {
            self.flush();
            self.current_shader = self.default_shader;
        }
        self.backend.unload_shader(id);
    }

    // -- batches --

    /// Allocate a batch with its own backend buffers. It shares the draw
    /// call capacity and depth settings of the default batch.
    pub fn load_render_batch(
        &mut self,
        buffer_count: usize,
        buffer_elements: usize,
    ) -> RenderBatch {
        let batch = allocate_batch(
            &mut self.backend,
            &self.settings,
            buffer_count,
            buffer_elements,
            self.default_texture,
        );
        tracing::info!(
            buffers = batch.buffer_count(),
            elements = buffer_elements,
            "render batch loaded"
        );
        batch
    }

    pub fn unload_render_batch(&mut self, batch: RenderBatch) {
        release_batch(&mut self.backend, &batch);
        tracing::info!(buffers = batch.buffer_count(), "render batch unloaded");
    }

    /// Flush the outgoing batch and make `batch` active. Returns the custom
    /// batch it replaces, if any.
    pub fn set_active_batch(&mut self, batch: RenderBatch) -> Option<RenderBatch> {
        self.flush();
        let previous = self.custom_batch.replace(batch);
        self.sync_open_call();
        previous
    }

    /// Flush and switch back to the default batch, returning the custom
    /// batch that was active.
    pub fn set_default_batch(&mut self) -> Option<RenderBatch> {
        self.flush();
        let previous = self.custom_batch.take();
        self.sync_open_call();
        previous
    }

    // -- stereo --

    pub fn enable_stereo(&mut self) {
        if !self.stereo_enabled {
            self.flush();
            self.stereo_enabled = true;
        }
    }

    pub fn disable_stereo(&mut self) {
        if self.stereo_enabled {
            self.flush();
            self.stereo_enabled = false;
        }
    }

    pub fn is_stereo_enabled(&self) -> bool {
        self.stereo_enabled
    }

    pub fn set_stereo_projection(&mut self, projection: [Mat4; 2]) {
        self.stereo.projection = Some(projection);
    }

    pub fn set_stereo_view_offset(&mut self, offset: [Mat4; 2]) {
        self.stereo.view_offset = offset;
    }

    pub fn set_framebuffer_size(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(0, 0, width, height);
    }
}
