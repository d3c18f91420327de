//! The graphics backend capability the batching core drives.
//!
//! Keeps the core independent of any particular GPU API. A backend hands
//! out opaque handles for textures, shaders and vertex buffers, accepts
//! uploads of the written prefix of a batch's vertex streams, and issues
//! draws over vertex or index ranges.

mod recording;

pub use recording::{Command, RecordingBackend, UploadedStreams};

use quadbatch_common::{BackendError, BufferId, ShaderId, TextureId, Viewport};

use crate::matrix::Mat4;
use crate::pixel::PixelFormat;

/// Color blending applied to every draw of a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    #[default]
    Alpha,
    Additive,
    Multiplied,
    AddColors,
    SubtractColors,
    AlphaPremultiply,
}

/// Backend-specific shader program source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub label: String,
    pub code: String,
}

impl ShaderSource {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

/// Borrowed view of the written prefix of a vertex buffer.
#[derive(Debug, Clone, Copy)]
pub struct VertexStreams<'a> {
    pub positions: &'a [[f32; 3]],
    pub texcoords: &'a [[f32; 2]],
    pub colors: &'a [[u8; 4]],
}

impl VertexStreams<'_> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Topology of a non-indexed draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Lines,
    Triangles,
}

/// A single draw over the bound vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Non-indexed draw of `count` vertices starting at `first`.
    Arrays {
        topology: Topology,
        first: u32,
        count: u32,
    },
    /// Triangle-list draw through the quad index pattern.
    Indexed { first_index: u32, index_count: u32 },
}

pub trait GraphicsBackend {
    /// Create a texture from `pixels` laid out in `format`.
    fn load_texture(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<TextureId, BackendError>;

    fn unload_texture(&mut self, id: TextureId);

    /// Create the built-in shader used when the caller sets none.
    fn load_default_shader(&mut self) -> Result<ShaderId, BackendError>;

    fn load_shader(&mut self, source: &ShaderSource) -> Result<ShaderId, BackendError>;

    fn unload_shader(&mut self, id: ShaderId);

    /// Allocate GPU storage for `capacity` vertices and upload the
    /// (immutable) quad index pattern once.
    fn load_vertex_buffer(
        &mut self,
        capacity: usize,
        indices: &[u32],
    ) -> Result<BufferId, BackendError>;

    fn unload_vertex_buffer(&mut self, id: BufferId);

    /// Replace the start of `buffer` with the written vertex streams.
    fn upload_vertices(&mut self, buffer: BufferId, streams: VertexStreams<'_>);

    fn set_viewport(&mut self, viewport: Viewport);

    fn use_shader(&mut self, shader: ShaderId);

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Upload the combined model-view-projection matrix.
    fn set_mvp(&mut self, mvp: &Mat4);

    /// Bind `texture` to sampler `unit`; unit 0 is the per-draw texture.
    fn bind_texture(&mut self, unit: u32, texture: TextureId);

    fn draw(&mut self, buffer: BufferId, command: DrawCommand);

    /// Called once after the draws of a flush have been issued.
    fn end_batch(&mut self) {}
}
