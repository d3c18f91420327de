//! The immediate-mode batching context.
//!
//! [`BatchContext`] owns the backend, the matrix stack and the render
//! batches, and exposes the begin / vertex / end submission API on top of
//! them. Every operation is infallible from the caller's side: misuse and
//! resource failures are logged, counted in [`BatchStats`] and recovered
//! locally.

mod resources;
mod submission;
mod transform;


use quadbatch_common::{Color, ShaderId, TextureId, Viewport};

use crate::backend::{BlendMode, GraphicsBackend};
use crate::batch::{DrawMode, RenderBatch};
use crate::executor::{self, FlushReport, FrameState, StereoState};
use crate::matrix_stack::MatrixStack;
use crate::pixel::PixelFormat;
use crate::settings::BatchSettings;
use crate::stats::BatchStats;

/// Whether a primitive span is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Open(DrawMode),
}

pub struct BatchContext<B: GraphicsBackend> {
    backend: B,
    settings: BatchSettings,
    matrices: MatrixStack,
    default_batch: RenderBatch,
    custom_batch: Option<RenderBatch>,
    state: SubmissionState,
    default_texture: TextureId,
    default_shader: ShaderId,
    current_texture: TextureId,
    current_shader: ShaderId,
    blend_mode: BlendMode,
    aux_textures: Vec<TextureId>,
    stereo: StereoState,
    stereo_enabled: bool,
    viewport: Viewport,
    stats: BatchStats,
}

impl<B: GraphicsBackend> BatchContext<B> {
    /// Create the default white texture, the default shader and the
    /// default batch on `backend`.
    ///
    /// Failures are logged; the context then runs with invalid handles for
    /// whatever could not be created.
    pub fn new(mut backend: B, settings: BatchSettings) -> Self {
        let default_texture = match backend.load_texture(
            &Color::WHITE.to_array(),
            1,
            1,
            PixelFormat::R8G8B8A8,
        ) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("failed to create default texture: {e}");
                TextureId::INVALID
            }
        };

        let default_shader = match backend.load_default_shader() {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("failed to create default shader: {e}");
                ShaderId::INVALID
            }
        };

        let default_batch = allocate_batch(
            &mut backend,
            &settings,
            settings.buffer_count,
            settings.buffer_elements,
            default_texture,
        );

        tracing::info!(
            texture = %default_texture,
            shader = %default_shader,
            buffers = default_batch.buffer_count(),
            elements = settings.buffer_elements,
            "batch context ready"
        );

        Self {
            backend,
            matrices: MatrixStack::new(settings.stack_size),
            default_batch,
            custom_batch: None,
            state: SubmissionState::Idle,
            default_texture,
            default_shader,
            current_texture: default_texture,
            current_shader: default_shader,
            blend_mode: BlendMode::default(),
            aux_textures: Vec::with_capacity(settings.max_texture_units),
            stereo: StereoState::from_separation(settings.eye_separation),
            stereo_enabled: settings.stereo_enabled,
            viewport: Viewport::new(0, 0, settings.framebuffer_width, settings.framebuffer_height),
            stats: BatchStats::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The batch currently receiving vertices.
    pub fn active_batch(&self) -> &RenderBatch {
        self.custom_batch.as_ref().unwrap_or(&self.default_batch)
    }

    fn active_batch_mut(&mut self) -> &mut RenderBatch {
        match &mut self.custom_batch {
            Some(batch) => batch,
            None => &mut self.default_batch,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn default_texture(&self) -> TextureId {
        self.default_texture
    }

    pub fn default_shader(&self) -> ShaderId {
        self.default_shader
    }

    pub fn current_texture(&self) -> TextureId {
        self.current_texture
    }

    pub fn current_shader(&self) -> ShaderId {
        self.current_shader
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn aux_textures(&self) -> &[TextureId] {
        &self.aux_textures
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Flush pending geometry, release every backend resource the context
    /// created and hand the backend back.
    pub fn close(mut self) -> B {
        if self.state != SubmissionState::Idle {
            tracing::warn!(state = ?self.state, "closing with an open primitive span");
            self.state = SubmissionState::Idle;
        }
        self.flush();

        if let Some(custom) = self.custom_batch.take() {
            release_batch(&mut self.backend, &custom);
        }
        release_batch(&mut self.backend, &self.default_batch);

        if self.default_shader.is_valid() {
            self.backend.unload_shader(self.default_shader);
        }
        if self.default_texture.is_valid() {
            self.backend.unload_texture(self.default_texture);
        }

        tracing::info!(flushes = self.stats.flushes, "batch context closed");
        self.backend
    }

    fn reject(&mut self, op: &'static str) {
        tracing::warn!(op, state = ?self.state, "call not allowed in current state, ignored");
        self.stats.rejected_calls += 1;
    }

    /// Drain the active batch to the backend.
    ///
    /// Auxiliary textures are cleared and, while a span is open, the fresh
    /// draw call is re-keyed to the span's mode and the current texture.
    fn flush(&mut self) -> FlushReport {
        let batch = match &mut self.custom_batch {
            Some(batch) => batch,
            None => &mut self.default_batch,
        };
        let frame = FrameState {
            shader: self.current_shader,
            blend: self.blend_mode,
            projection: self.matrices.projection(),
            modelview: self.matrices.modelview(),
            stereo: self.stereo_enabled.then_some(&self.stereo),
            viewport: self.viewport,
            aux_textures: &self.aux_textures,
            default_texture: self.default_texture,
        };
        let report = executor::execute(batch, &mut self.backend, &frame);

        self.stats.flushes += 1;
        self.stats.draw_calls_issued += report.draw_calls as u64;
        self.stats.vertices_uploaded += report.vertices as u64;
        self.aux_textures.clear();
        self.sync_open_call();
        report
    }

    fn sync_open_call(&mut self) {
        if let SubmissionState::Open(mode) = self.state {
            let texture = self.current_texture;
            let call = self.active_batch_mut().open_call_mut();
            call.mode = mode;
            call.texture = texture;
        }
    }

    /// Make the open draw call match `mode` and `texture`.
    ///
    /// An empty call is re-keyed in place. Otherwise the open call is
    /// closed out with its alignment padding and a new call is opened,
    /// flushing first if the padding does not fit or the draw list is full.
    fn switch_draw_state(&mut self, mode: DrawMode, texture: TextureId) {
        let open = *self.active_batch().open_call();
        if open.mode == mode && open.texture == texture {
            return;
        }

        if !open.is_empty() {
            let alignment = self.active_batch_mut().open_call_mut().close_out();
            if !self.check_render_batch_limit(alignment) {
                let batch = self.active_batch_mut();
                let padded = batch.active_buffer_mut().pad(alignment);
                debug_assert!(padded);

                if !batch.is_draw_list_full() {
                    batch.push_draw(mode, texture);
                    return;
                }
                self.flush();
            }
        }

        let call = self.active_batch_mut().open_call_mut();
        call.mode = mode;
        call.texture = texture;
    }
}

impl<B: GraphicsBackend> std::fmt::Debug for BatchContext<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchContext")
            .field("state", &self.state)
            .field("current_texture", &self.current_texture)
            .field("current_shader", &self.current_shader)
            .field("blend_mode", &self.blend_mode)
            .field("stack_depth", &self.matrices.depth())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Host storage plus one backend vertex buffer per slot. A slot whose
/// backend buffer cannot be created stays detached and its flushes are
/// dropped.
fn allocate_batch<B: GraphicsBackend + ?Sized>(
    backend: &mut B,
    settings: &BatchSettings,
    buffer_count: usize,
    buffer_elements: usize,
    default_texture: TextureId,
) -> RenderBatch {
    let mut batch = RenderBatch::new(
        buffer_count,
        buffer_elements,
        settings.draw_calls,
        settings.depth_baseline,
        default_texture,
    );

    for (i, buffer) in batch.buffers_mut().iter_mut().enumerate() {
        match backend.load_vertex_buffer(buffer.capacity(), buffer.indices()) {
            Ok(id) => buffer.set_gpu(id),
            Err(e) => tracing::error!(slot = i, "failed to create vertex buffer: {e}"),
        }
    }
    batch
}

fn release_batch<B: GraphicsBackend + ?Sized>(backend: &mut B, batch: &RenderBatch) {
    for id in batch.buffers().iter().filter_map(|b| b.gpu()) {
        backend.unload_vertex_buffer(id);
    }
}
