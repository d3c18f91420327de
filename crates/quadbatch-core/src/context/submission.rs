use quadbatch_common::Color;

use super::{BatchContext, SubmissionState};
use crate::backend::GraphicsBackend;
use crate::batch::DrawMode;
use crate::executor::FlushReport;

impl<B: GraphicsBackend> BatchContext<B> {
    /// Open a primitive span of `mode`.
    ///
    /// The open draw call is switched to (`mode`, current texture); a
    /// non-empty call with a different key is closed out first.
    pub fn begin(&mut self, mode: DrawMode) {
        if self.state != SubmissionState::Idle {
            self.reject("begin");
            return;
        }
        self.switch_draw_state(mode, self.current_texture);
        self.state = SubmissionState::Open(mode);
    }

    /// Close the open span: reconcile attribute counts and advance depth.
    ///
    /// When the active buffer is within four vertices of capacity the
    /// matrix stack is unwound and the batch flushed.
    pub fn end(&mut self) {
        if self.state == SubmissionState::Idle {
            self.reject("end");
            return;
        }
        self.state = SubmissionState::Idle;

        let step = self.settings.depth_step;
        let batch = self.active_batch_mut();
        batch.active_buffer_mut().reconcile();
        batch.advance_depth(step);

        if batch.would_overflow(4) {
            self.matrices.pop_all();
            self.flush();
        }
    }

    pub fn vertex3f(&mut self, x: f32, y: f32, z: f32) {
        if self.state == SubmissionState::Idle {
            self.reject("vertex");
            return;
        }

        let position = self.matrices.transform_vertex([x, y, z]);
        if !self.active_batch_mut().push_vertex(position) {
            tracing::warn!(
                capacity = self.active_batch().active_buffer().capacity(),
                "vertex buffer full, vertex dropped"
            );
            self.stats.dropped_vertices += 1;
        }
    }

    /// 2-D vertex at the batch's current depth.
    pub fn vertex2f(&mut self, x: f32, y: f32) {
        let z = self.active_batch().current_depth();
        self.vertex3f(x, y, z);
    }

    pub fn vertex2i(&mut self, x: i32, y: i32) {
        self.vertex2f(x as f32, y as f32);
    }

    pub fn tex_coord2f(&mut self, u: f32, v: f32) {
        if self.state == SubmissionState::Idle {
            self.reject("tex_coord");
            return;
        }
        if !self.active_batch_mut().active_buffer_mut().push_texcoord([u, v]) {
            self.stats.dropped_attributes += 1;
        }
    }

    /// Normals are not part of the batched attributes.
    pub fn normal3f(&mut self, _x: f32, _y: f32, _z: f32) {}

    pub fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        if self.state == SubmissionState::Idle {
            self.reject("color");
            return;
        }
        let color = Color::from_rgba(r, g, b, a);
        if !self.active_batch_mut().active_buffer_mut().push_color(color) {
            self.stats.dropped_attributes += 1;
        }
    }

    pub fn color4f(&mut self, r: f32, g: f32, b: f32, a: f32) {
        let c = Color::from_f32(r, g, b, a);
        self.color4ub(c.r, c.g, c.b, c.a);
    }

    pub fn color3f(&mut self, r: f32, g: f32, b: f32) {
        self.color4f(r, g, b, 1.0);
    }

    /// True when `extra` more vertices would fill the active buffer.
    pub fn would_overflow(&self, extra: usize) -> bool {
        self.active_batch().would_overflow(extra)
    }

    /// Flush if `extra` more vertices would not fit. The open draw call
    /// keeps its mode and texture across the flush.
    pub fn check_render_batch_limit(&mut self, extra: usize) -> bool {
        if !self.would_overflow(extra) {
            return false;
        }

        let open = *self.active_batch().open_call();
        self.flush();
        let call = self.active_batch_mut().open_call_mut();
        call.mode = open.mode;
        call.texture = open.texture;
        true
    }

    /// Force a flush of the active batch.
    pub fn draw_render_batch(&mut self) -> FlushReport {
        self.flush()
    }
}
