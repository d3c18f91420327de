//! Drains a [`RenderBatch`] into a [`GraphicsBackend`].
//!
//! One flush uploads the written prefix of the active vertex buffer, then
//! replays the draw-call list once per eye (twice when stereo is on),
//! and finally resets the batch and rotates to its next buffer.

use quadbatch_common::{BufferId, ShaderId, TextureId, Viewport};

use crate::backend::{BlendMode, DrawCommand, GraphicsBackend, Topology};
use crate::batch::{DrawCall, DrawMode, RenderBatch};
use crate::matrix::{self, Mat4, IDENTITY};

/// Per-eye matrices for dual-view rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoState {
    /// Eye projections. `None` reuses the main projection for both eyes.
    pub projection: Option<[Mat4; 2]>,
    /// Applied after the modelview for each eye.
    pub view_offset: [Mat4; 2],
}

impl StereoState {
    /// Offsets for eyes `separation` apart, projection left unset.
    pub fn from_separation(separation: f32) -> Self {
        let half = separation / 2.0;
        Self {
            projection: None,
            view_offset: [
                matrix::translate(half, 0.0, 0.0),
                matrix::translate(-half, 0.0, 0.0),
            ],
        }
    }
}

impl Default for StereoState {
    fn default() -> Self {
        Self {
            projection: None,
            view_offset: [IDENTITY; 2],
        }
    }
}

/// Pipeline state shared by every draw of one flush.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    pub shader: ShaderId,
    pub blend: BlendMode,
    pub projection: &'a Mat4,
    pub modelview: &'a Mat4,
    /// Present only while stereo rendering is enabled.
    pub stereo: Option<&'a StereoState>,
    /// Full framebuffer viewport.
    pub viewport: Viewport,
    /// Bound to units 1.. before the draw loop.
    pub aux_textures: &'a [TextureId],
    pub default_texture: TextureId,
}

/// What one flush sent to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub vertices: usize,
    /// Draw commands issued, summed over eyes.
    pub draw_calls: usize,
    pub eyes: usize,
}

/// Backend command for `call` starting `offset` vertices into the buffer.
pub fn draw_command(call: &DrawCall, offset: usize) -> DrawCommand {
    match call.mode {
        DrawMode::Lines => DrawCommand::Arrays {
            topology: Topology::Lines,
            first: offset as u32,
            count: call.vertex_count as u32,
        },
        DrawMode::Triangles => DrawCommand::Arrays {
            topology: Topology::Triangles,
            first: offset as u32,
            count: call.vertex_count as u32,
        },
        DrawMode::Quads => DrawCommand::Indexed {
            first_index: (offset / 4 * 6) as u32,
            index_count: (call.vertex_count / 4 * 6) as u32,
        },
    }
}

/// Upload and draw everything recorded in `batch`, then reset it and
/// advance to the next buffer.
///
/// A batch with no vertices issues no backend commands at all.
pub fn execute<B: GraphicsBackend + ?Sized>(
    batch: &mut RenderBatch,
    backend: &mut B,
    frame: &FrameState<'_>,
) -> FlushReport {
    let mut report = FlushReport::default();

    let buffer = batch.active_buffer_mut();
    buffer.reconcile();
    let vertices = buffer.vertex_count();

    if vertices > 0 {
        match buffer.gpu() {
            Some(gpu) => {
                backend.upload_vertices(gpu, buffer.streams());
                report.vertices = vertices;

                let eyes = if frame.stereo.is_some() { 2 } else { 1 };
                for eye in 0..eyes {
                    report.draw_calls += draw_eye(batch, backend, frame, eye, gpu);
                }
                report.eyes = eyes;

                if frame.stereo.is_some() {
                    backend.set_viewport(frame.viewport);
                }
                backend.end_batch();
            }
            None => {
                tracing::warn!(vertices, "active buffer has no backend storage, batch dropped");
            }
        }
    }

    tracing::trace!(
        vertices = report.vertices,
        draw_calls = report.draw_calls,
        buffer = batch.current_buffer(),
        "batch flushed"
    );

    batch.reset(frame.default_texture);
    batch.advance_buffer();
    report
}

fn draw_eye<B: GraphicsBackend + ?Sized>(
    batch: &RenderBatch,
    backend: &mut B,
    frame: &FrameState<'_>,
    eye: usize,
    gpu: BufferId,
) -> usize {
    let mvp = match frame.stereo {
        Some(stereo) => {
            backend.set_viewport(frame.viewport.eye(eye as u32));
            let modelview = matrix::mul(&stereo.view_offset[eye], frame.modelview);
            let projection = stereo
                .projection
                .map_or(*frame.projection, |p| p[eye]);
            matrix::mul(&projection, &modelview)
        }
        None => matrix::mul(frame.projection, frame.modelview),
    };

    backend.use_shader(frame.shader);
    backend.set_blend_mode(frame.blend);
    backend.set_mvp(&mvp);

    for (i, texture) in frame.aux_textures.iter().enumerate() {
        backend.bind_texture(i as u32 + 1, *texture);
    }

    let mut issued = 0;
    let mut offset = 0;
    for call in batch.draws() {
        if !call.is_empty() {
            backend.bind_texture(0, call.texture);
            backend.draw(gpu, draw_command(call, offset));
            issued += 1;
        }
        offset += call.span();
    }
    issued
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Command, RecordingBackend};
    use quadbatch_common::Color;

    const WHITE_TEX: TextureId = TextureId(100);

    fn batch_with_gpu(buffers: usize) -> RenderBatch {
        let mut batch = RenderBatch::new(buffers, 4, 8, -1.0, WHITE_TEX);
        for (i, buffer) in batch.buffers_mut().iter_mut().enumerate() {
            buffer.set_gpu(BufferId(50 + i as u32));
        }
        batch
    }

    fn frame<'a>(stereo: Option<&'a StereoState>, aux: &'a [TextureId]) -> FrameState<'a> {
        FrameState {
            shader: ShaderId(7),
            blend: BlendMode::Alpha,
            projection: &IDENTITY,
            modelview: &IDENTITY,
            stereo,
            viewport: Viewport::new(0, 0, 800, 450),
            aux_textures: aux,
            default_texture: WHITE_TEX,
        }
    }

    fn push_quad(batch: &mut RenderBatch) {
        for _ in 0..4 {
            batch.active_buffer_mut().push_vertex([0.0; 3]);
            batch.active_buffer_mut().push_color(Color::WHITE);
            batch.open_call_mut().vertex_count += 1;
        }
    }

    #[test]
    fn quads_draw_through_index_pattern() {
        let mut batch = batch_with_gpu(1);
        push_quad(&mut batch);
        push_quad(&mut batch);
        let mut backend = RecordingBackend::new();

        let report = execute(&mut batch, &mut backend, &frame(None, &[]));

        assert_eq!(report.vertices, 8);
        assert_eq!(report.draw_calls, 1);
        assert_eq!(
            backend.draws(),
            vec![DrawCommand::Indexed {
                first_index: 0,
                index_count: 12
            }]
        );
        assert_eq!(backend.commands().last(), Some(&Command::EndBatch));
    }

    #[test]
    fn offsets_include_alignment() {
        let mut batch = batch_with_gpu(1);
        batch.open_call_mut().mode = DrawMode::Triangles;
        for _ in 0..3 {
            batch.active_buffer_mut().push_vertex([0.0; 3]);
            batch.open_call_mut().vertex_count += 1;
        }
        let pad = batch.open_call_mut().close_out();
        batch.active_buffer_mut().pad(pad);
        batch.push_draw(DrawMode::Quads, TextureId(3));
        push_quad(&mut batch);

        let mut backend = RecordingBackend::new();
        execute(&mut batch, &mut backend, &frame(None, &[]));

        assert_eq!(
            backend.draws(),
            vec![
                DrawCommand::Arrays {
                    topology: Topology::Triangles,
                    first: 0,
                    count: 3
                },
                DrawCommand::Indexed {
                    first_index: 6,
                    index_count: 6
                },
            ]
        );
        assert_eq!(backend.bound_textures(), vec![WHITE_TEX, TextureId(3)]);
    }

    #[test]
    fn empty_batch_issues_nothing() {
        let mut batch = batch_with_gpu(1);
        let mut backend = RecordingBackend::new();
        let report = execute(&mut batch, &mut backend, &frame(None, &[]));
        assert_eq!(report, FlushReport::default());
        assert!(backend.commands().is_empty());
    }

    #[test]
    fn flush_resets_and_rotates() {
        let mut batch = batch_with_gpu(3);
        let mut backend = RecordingBackend::new();
        for k in 1..=5 {
            push_quad(&mut batch);
            execute(&mut batch, &mut backend, &frame(None, &[]));
            assert_eq!(batch.current_buffer(), k % 3);
            assert_eq!(batch.draws_counter(), 1);
            assert_eq!(batch.current_depth(), -1.0);
            assert!(batch.buffers().iter().all(|b| b.vertex_count() == 0));
        }
    }

    #[test]
    fn aux_textures_bind_from_unit_one() {
        let mut batch = batch_with_gpu(1);
        push_quad(&mut batch);
        let mut backend = RecordingBackend::new();
        let aux = [TextureId(20), TextureId(21)];
        execute(&mut batch, &mut backend, &frame(None, &aux));

        let binds: Vec<_> = backend
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::BindTexture { unit, texture } if *unit > 0 => Some((*unit, *texture)),
                _ => None,
            })
            .collect();
        assert_eq!(binds, vec![(1, TextureId(20)), (2, TextureId(21))]);
    }

    #[test]
    fn stereo_draws_each_eye_and_restores_viewport() {
        let mut batch = batch_with_gpu(1);
        push_quad(&mut batch);
        let mut backend = RecordingBackend::new();
        let stereo = StereoState::from_separation(0.2);
        let report = execute(&mut batch, &mut backend, &frame(Some(&stereo), &[]));

        assert_eq!(report.eyes, 2);
        assert_eq!(report.draw_calls, 2);

        let viewports: Vec<_> = backend
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Viewport(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(
            viewports,
            vec![
                Viewport::new(0, 0, 400, 450),
                Viewport::new(400, 0, 400, 450),
                Viewport::new(0, 0, 800, 450),
            ]
        );

        let mvps: Vec<_> = backend
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Mvp(m) => Some(*m),
                _ => None,
            })
            .collect();
        assert_eq!(mvps[0], matrix::translate(0.1, 0.0, 0.0));
        assert_eq!(mvps[1], matrix::translate(-0.1, 0.0, 0.0));
    }

    #[test]
    fn missing_gpu_storage_drops_the_batch() {
        let mut batch = RenderBatch::new(1, 4, 8, -1.0, WHITE_TEX);
        push_quad(&mut batch);
        let mut backend = RecordingBackend::new();
        let report = execute(&mut batch, &mut backend, &frame(None, &[]));
        assert_eq!(report.vertices, 0);
        assert!(backend.commands().is_empty());
        assert_eq!(batch.active_buffer().vertex_count(), 0);
    }
}
