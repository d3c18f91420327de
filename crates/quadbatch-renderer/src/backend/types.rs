use quadbatch_common::{BufferId, Color, ShaderId, TextureId, Viewport};
use quadbatch_core::{BlendMode, DrawCommand, Mat4, Topology, VertexStreams};

use crate::gpu::PhysicalSize;

/// Interleaved vertex as laid out in the GPU vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct GpuVertex {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
    /// RGBA8, read as `Unorm8x4`.
    pub color: [u8; 4],
}

/// Uniform block matching the WGSL `Uniforms` struct.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct MvpUniform {
    pub mvp: Mat4,
}

/// MVP slots per batch. Two eyes need two; the rest is headroom for
/// backends driven directly.
pub(crate) const MVP_SLOTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PipelineKey {
    pub shader: ShaderId,
    pub blend: BlendMode,
    pub topology: wgpu::PrimitiveTopology,
}

/// One draw recorded during a batch, with the state it was issued under.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawOp {
    pub buffer: BufferId,
    pub command: DrawCommand,
    pub shader: ShaderId,
    pub blend: BlendMode,
    pub texture: TextureId,
    pub mvp_slot: usize,
    pub viewport: Viewport,
}

pub(crate) fn primitive_topology(command: &DrawCommand) -> wgpu::PrimitiveTopology {
    match command {
        DrawCommand::Arrays {
            topology: Topology::Lines,
            ..
        } => wgpu::PrimitiveTopology::LineList,
        DrawCommand::Arrays {
            topology: Topology::Triangles,
            ..
        }
        | DrawCommand::Indexed { .. } => wgpu::PrimitiveTopology::TriangleList,
    }
}

/// Round `value` up to a multiple of `alignment`.
pub(crate) fn align_to(value: u64, alignment: u64) -> u64 {
    if alignment == 0 {
        return value;
    }
    value.div_ceil(alignment) * alignment
}

/// Interleave the written streams. Missing attributes get a zero texcoord
/// and opaque white.
pub(crate) fn interleave(streams: VertexStreams<'_>) -> Vec<GpuVertex> {
    let white = Color::WHITE.to_array();
    streams
        .positions
        .iter()
        .enumerate()
        .map(|(i, &position)| GpuVertex {
            position,
            texcoord: streams.texcoords.get(i).copied().unwrap_or([0.0; 2]),
            color: streams.colors.get(i).copied().unwrap_or(white),
        })
        .collect()
}

/// Clip a viewport to the render target; never returns an empty rect.
pub(crate) fn clamp_viewport(viewport: Viewport, size: PhysicalSize) -> Viewport {
    let x = viewport.x.min(size.width.saturating_sub(1));
    let y = viewport.y.min(size.height.saturating_sub(1));
    Viewport {
        x,
        y,
        width: viewport.width.clamp(1, size.width - x),
        height: viewport.height.clamp(1, size.height - y),
    }
}
