use quadbatch_common::TextureId;

use super::{DrawCall, DrawMode, VertexBuffer};

/// One or more vertex buffers plus the ordered list of draw calls
/// recorded against the active one.
///
/// There is always at least one draw call: the last entry is the open
/// call that new vertices are counted against.
#[derive(Debug, Clone)]
pub struct RenderBatch {
    buffers: Vec<VertexBuffer>,
    current_buffer: usize,
    draws: Vec<DrawCall>,
    draw_capacity: usize,
    current_depth: f32,
    depth_baseline: f32,
}

impl RenderBatch {
    /// Allocate host storage. Backend buffers are attached separately.
    pub fn new(
        buffer_count: usize,
        buffer_elements: usize,
        draw_capacity: usize,
        depth_baseline: f32,
        default_texture: TextureId,
    ) -> Self {
        let buffer_count = buffer_count.max(1);
        let draw_capacity = draw_capacity.max(1);

        let mut draws = Vec::with_capacity(draw_capacity);
        draws.push(DrawCall::new(DrawMode::Quads, default_texture));

        Self {
            buffers: (0..buffer_count)
                .map(|_| VertexBuffer::new(buffer_elements))
                .collect(),
            current_buffer: 0,
            draws,
            draw_capacity,
            current_depth: depth_baseline,
            depth_baseline,
        }
    }

    pub fn buffers(&self) -> &[VertexBuffer] {
        &self.buffers
    }

    pub(crate) fn buffers_mut(&mut self) -> &mut [VertexBuffer] {
        &mut self.buffers
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn current_buffer(&self) -> usize {
        self.current_buffer
    }

    pub fn active_buffer(&self) -> &VertexBuffer {
        &self.buffers[self.current_buffer]
    }

    pub fn active_buffer_mut(&mut self) -> &mut VertexBuffer {
        &mut self.buffers[self.current_buffer]
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Number of draw calls in use, the open one included.
    pub fn draws_counter(&self) -> usize {
        self.draws.len()
    }

    pub fn draw_capacity(&self) -> usize {
        self.draw_capacity
    }

    pub fn is_draw_list_full(&self) -> bool {
        self.draws.len() >= self.draw_capacity
    }

    pub fn open_call(&self) -> &DrawCall {
        // `draws` is never empty
        &self.draws[self.draws.len() - 1]
    }

    pub fn open_call_mut(&mut self) -> &mut DrawCall {
        let last = self.draws.len() - 1;
        &mut self.draws[last]
    }

    /// Open a fresh call after the current one. Callers check
    /// [`Self::is_draw_list_full`] first.
    pub(crate) fn push_draw(&mut self, mode: DrawMode, texture: TextureId) {
        debug_assert!(!self.is_draw_list_full());
        self.draws.push(DrawCall::new(mode, texture));
    }

    pub fn current_depth(&self) -> f32 {
        self.current_depth
    }

    pub fn depth_baseline(&self) -> f32 {
        self.depth_baseline
    }

    pub(crate) fn advance_depth(&mut self, step: f32) {
        self.current_depth += step;
    }

    /// True when `extra` more vertices would fill the active buffer.
    pub fn would_overflow(&self, extra: usize) -> bool {
        self.active_buffer().would_overflow(extra)
    }

    /// Append a vertex to the active buffer and count it against the open
    /// call. Refused when the buffer is full.
    pub(crate) fn push_vertex(&mut self, position: [f32; 3]) -> bool {
        if !self.active_buffer_mut().push_vertex(position) {
            return false;
        }
        self.open_call_mut().vertex_count += 1;
        true
    }

    /// Forget everything recorded against the active buffer and reopen a
    /// single untextured quads call.
    pub(crate) fn reset(&mut self, default_texture: TextureId) {
        self.active_buffer_mut().clear();
        self.current_depth = self.depth_baseline;
        self.draws.truncate(1);
        self.draws[0].reset(DrawMode::Quads, default_texture);
    }

    /// Move to the next buffer, round-robin.
    pub(crate) fn advance_buffer(&mut self) {
        self.current_buffer = (self.current_buffer + 1) % self.buffers.len();
    }
}
