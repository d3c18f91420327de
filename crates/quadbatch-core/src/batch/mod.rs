//! Host-side batch storage: vertex buffers, draw calls and the render
//! batch that owns them.

mod draw_call;
mod render_batch;
mod vertex_buffer;

pub use draw_call::*;
pub use render_batch::*;
pub use vertex_buffer::*;
