//! In-memory backend that records every command it receives.
//!
//! Used for headless runs and tests. Handles are handed out from a single
//! monotonically increasing counter starting at 1.

use quadbatch_common::{BackendError, BufferId, ShaderId, TextureId, Viewport};

use super::{BlendMode, DrawCommand, GraphicsBackend, ShaderSource, VertexStreams};
use crate::matrix::Mat4;
use crate::pixel::PixelFormat;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadTexture {
        id: TextureId,
        width: u32,
        height: u32,
        format: PixelFormat,
    },
    UnloadTexture(TextureId),
    LoadShader {
        id: ShaderId,
        label: String,
    },
    UnloadShader(ShaderId),
    LoadVertexBuffer {
        id: BufferId,
        capacity: usize,
        indices: usize,
    },
    UnloadVertexBuffer(BufferId),
    Upload {
        buffer: BufferId,
        vertices: usize,
        texcoords: usize,
        colors: usize,
    },
    Viewport(Viewport),
    UseShader(ShaderId),
    Blend(BlendMode),
    Mvp(Mat4),
    BindTexture {
        unit: u32,
        texture: TextureId,
    },
    Draw {
        buffer: BufferId,
        command: DrawCommand,
    },
    EndBatch,
}

/// Copy of the most recent vertex upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadedStreams {
    pub positions: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
    pub colors: Vec<[u8; 4]>,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<Command>,
    next_handle: u32,
    last_upload: Option<UploadedStreams>,
    fail_textures: bool,
    fail_shaders: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent texture creation fail.
    pub fn fail_texture_loads(&mut self, fail: bool) {
        self.fail_textures = fail;
    }

    /// Make every subsequent shader creation (default included) fail.
    pub fn fail_shader_loads(&mut self, fail: bool) {
        self.fail_shaders = fail;
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Every draw command recorded so far, in order.
    pub fn draws(&self) -> Vec<DrawCommand> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Draw { command, .. } => Some(*command),
                _ => None,
            })
            .collect()
    }

    /// Textures bound to unit 0, in order.
    pub fn bound_textures(&self) -> Vec<TextureId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::BindTexture { unit: 0, texture } => Some(*texture),
                _ => None,
            })
            .collect()
    }

    pub fn last_upload(&self) -> Option<&UploadedStreams> {
        self.last_upload.as_ref()
    }

    fn next_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl GraphicsBackend for RecordingBackend {
    fn load_texture(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<TextureId, BackendError> {
        if self.fail_textures {
            return Err(BackendError::Texture("texture loads disabled".into()));
        }
        if width == 0 || height == 0 {
            return Err(BackendError::Texture(format!(
                "invalid size {width}x{height}"
            )));
        }
        if pixels.len() < format.data_size(width, height) {
            return Err(BackendError::Texture("pixel data too short".into()));
        }
        let id = TextureId(self.next_handle());
        self.commands.push(Command::LoadTexture {
            id,
            width,
            height,
            format,
        });
        Ok(id)
    }

    fn unload_texture(&mut self, id: TextureId) {
        self.commands.push(Command::UnloadTexture(id));
    }

    fn load_default_shader(&mut self) -> Result<ShaderId, BackendError> {
        self.load_shader(&ShaderSource::new("default", ""))
    }

    fn load_shader(&mut self, source: &ShaderSource) -> Result<ShaderId, BackendError> {
        if self.fail_shaders {
            return Err(BackendError::Shader(format!(
                "shader loads disabled ({})",
                source.label
            )));
        }
        let id = ShaderId(self.next_handle());
        self.commands.push(Command::LoadShader {
            id,
            label: source.label.clone(),
        });
        Ok(id)
    }

    fn unload_shader(&mut self, id: ShaderId) {
        self.commands.push(Command::UnloadShader(id));
    }

    fn load_vertex_buffer(
        &mut self,
        capacity: usize,
        indices: &[u32],
    ) -> Result<BufferId, BackendError> {
        let id = BufferId(self.next_handle());
        self.commands.push(Command::LoadVertexBuffer {
            id,
            capacity,
            indices: indices.len(),
        });
        Ok(id)
    }

    fn unload_vertex_buffer(&mut self, id: BufferId) {
        self.commands.push(Command::UnloadVertexBuffer(id));
    }

    fn upload_vertices(&mut self, buffer: BufferId, streams: VertexStreams<'_>) {
        self.commands.push(Command::Upload {
            buffer,
            vertices: streams.positions.len(),
            texcoords: streams.texcoords.len(),
            colors: streams.colors.len(),
        });
        self.last_upload = Some(UploadedStreams {
            positions: streams.positions.to_vec(),
            texcoords: streams.texcoords.to_vec(),
            colors: streams.colors.to_vec(),
        });
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.commands.push(Command::Viewport(viewport));
    }

    fn use_shader(&mut self, shader: ShaderId) {
        self.commands.push(Command::UseShader(shader));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.commands.push(Command::Blend(mode));
    }

    fn set_mvp(&mut self, mvp: &Mat4) {
        self.commands.push(Command::Mvp(*mvp));
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureId) {
        self.commands.push(Command::BindTexture { unit, texture });
    }

    fn draw(&mut self, buffer: BufferId, command: DrawCommand) {
        self.commands.push(Command::Draw { buffer, command });
    }

    fn end_batch(&mut self) {
        self.commands.push(Command::EndBatch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_nonzero() {
        let mut backend = RecordingBackend::new();
        let t = backend
            .load_texture(&[255; 4], 1, 1, PixelFormat::R8G8B8A8)
            .unwrap();
        let s = backend.load_default_shader().unwrap();
        let b = backend.load_vertex_buffer(16, &[0, 1, 2]).unwrap();
        assert!(t.is_valid());
        assert!(s.is_valid());
        assert_ne!(t.0, s.0);
        assert_ne!(s.0, b.0);
    }

    #[test]
    fn short_pixel_data_is_rejected() {
        let mut backend = RecordingBackend::new();
        let result = backend.load_texture(&[0; 3], 2, 2, PixelFormat::R8G8B8A8);
        assert!(matches!(result, Err(BackendError::Texture(_))));
    }

    #[test]
    fn failure_switches() {
        let mut backend = RecordingBackend::new();
        backend.fail_texture_loads(true);
        backend.fail_shader_loads(true);
        assert!(backend
            .load_texture(&[255; 4], 1, 1, PixelFormat::R8G8B8A8)
            .is_err());
        assert!(backend.load_default_shader().is_err());
        assert!(backend.commands().is_empty());
    }

    #[test]
    fn upload_keeps_a_copy() {
        let mut backend = RecordingBackend::new();
        let positions = [[1.0, 2.0, 3.0]];
        let texcoords = [[0.5, 0.5]];
        let colors = [[1, 2, 3, 4]];
        backend.upload_vertices(
            BufferId(9),
            VertexStreams {
                positions: &positions,
                texcoords: &texcoords,
                colors: &colors,
            },
        );
        let upload = backend.last_upload().unwrap();
        assert_eq!(upload.positions, vec![[1.0, 2.0, 3.0]]);
        assert_eq!(
            backend.commands()[0],
            Command::Upload {
                buffer: BufferId(9),
                vertices: 1,
                texcoords: 1,
                colors: 1
            }
        );
    }
}
