//! wgpu implementation of the batching core's graphics backend.
//!
//! Renders into a headless offscreen target. Every flush of the core is
//! recorded as a list of draws and encoded into a single render pass when
//! the core signals the end of the batch.
//!
//! Custom shaders are WGSL and must expose the same interface as the
//! built-in one: `vs_main` / `fs_main` entry points, the MVP uniform at
//! group 0 and the unit-0 texture + sampler at group 1.

mod backend;
pub mod gpu;

pub use backend::{WgpuBackend, DEFAULT_SHADER_SOURCE};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
