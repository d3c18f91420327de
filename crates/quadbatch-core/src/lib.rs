//! Immediate-mode geometry batching.
//!
//! Callers issue primitives through a `begin` / `vertex` / `color` /
//! `tex_coord` / `end` sequence on a [`BatchContext`]. The context
//! accumulates vertex streams in host memory, groups them into draw calls
//! keyed by topology and texture, and flushes to a [`GraphicsBackend`]
//! only when a state change, a capacity limit or an explicit
//! [`BatchContext::draw_render_batch`] forces it.

pub mod backend;
pub mod batch;
pub mod context;
pub mod executor;
pub mod matrix;
pub mod matrix_stack;
pub mod pixel;
pub mod settings;
pub mod stats;

pub use backend::{
    BlendMode, Command, DrawCommand, GraphicsBackend, RecordingBackend, ShaderSource, Topology,
    VertexStreams,
};
pub use batch::{DrawCall, DrawMode, RenderBatch, VertexBuffer};
pub use context::{BatchContext, SubmissionState};
pub use executor::{FlushReport, StereoState};
pub use matrix::Mat4;
pub use matrix_stack::{MatrixMode, MatrixStack};
pub use pixel::{PixelCodec, PixelFormat, StandardCodec};
pub use settings::BatchSettings;
pub use stats::BatchStats;
