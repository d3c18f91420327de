//! Offscreen wgpu backend for the batching core.

mod pipeline;
mod types;

pub use pipeline::DEFAULT_SHADER_SOURCE;

use std::collections::HashMap;

use quadbatch_common::{BackendError, BufferId, Color, ShaderId, TextureId, Viewport};
use quadbatch_core::{
    BlendMode, DrawCommand, GraphicsBackend, Mat4, PixelCodec, PixelFormat, ShaderSource,
    StandardCodec, VertexStreams,
};
use wgpu::util::DeviceExt;

use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use types::{DrawOp, GpuVertex, MvpUniform, PipelineKey, MVP_SLOTS};

const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

struct TextureEntry {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

struct GpuBuffer {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    capacity: usize,
}

/// Pipeline state as set by the core between draws.
#[derive(Debug, Clone, Copy)]
struct DrawState {
    viewport: Viewport,
    shader: ShaderId,
    blend: BlendMode,
    texture: TextureId,
    mvp_slot: Option<usize>,
}

/// Renders batches into an RGBA8 offscreen texture.
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    size: PhysicalSize,
    target: wgpu::Texture,
    target_view: wgpu::TextureView,
    texture_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniform_stride: u64,
    sampler: wgpu::Sampler,
    fallback_texture: TextureEntry,
    textures: HashMap<TextureId, TextureEntry>,
    shaders: HashMap<ShaderId, wgpu::ShaderModule>,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,
    buffers: HashMap<BufferId, GpuBuffer>,
    next_handle: u32,
    state: DrawState,
    mvps: Vec<Mat4>,
    draws: Vec<DrawOp>,
    pending_clear: Option<wgpu::Color>,
}

impl WgpuBackend {
    /// Create the offscreen target and shared GPU objects.
    pub fn new(gpu: GpuContext, width: u32, height: u32) -> Self {
        let GpuContext { device, queue, .. } = gpu;
        let size = PhysicalSize {
            width: width.max(1),
            height: height.max(1),
        };

        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("batch target"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        let uniform_layout = pipeline::uniform_layout(&device);
        let texture_layout = pipeline::texture_layout(&device);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("batch pipeline layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        // One aligned MVP slot per eye (or per set_mvp) within a batch
        let uniform_stride = types::align_to(
            std::mem::size_of::<MvpUniform>() as u64,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("batch mvp uniforms"),
            size: uniform_stride * MVP_SLOTS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("batch mvp bind group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<MvpUniform>() as u64),
                }),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("batch sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let fallback_texture = create_texture_entry(
            &device,
            &queue,
            &texture_layout,
            &sampler,
            &Color::WHITE.to_array(),
            1,
            1,
        );

        // Unknown shader handles resolve to the built-in module at INVALID
        let builtin = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("builtin batch shader"),
            source: wgpu::ShaderSource::Wgsl(DEFAULT_SHADER_SOURCE.into()),
        });
        let mut shaders = HashMap::new();
        shaders.insert(ShaderId::INVALID, builtin);

        tracing::info!(
            width = size.width,
            height = size.height,
            uniform_stride,
            "wgpu batch backend ready"
        );

        Self {
            device,
            queue,
            size,
            target,
            target_view,
            texture_layout,
            pipeline_layout,
            uniform_buffer,
            uniform_bind_group,
            uniform_stride,
            sampler,
            fallback_texture,
            textures: HashMap::new(),
            shaders,
            pipelines: HashMap::new(),
            buffers: HashMap::new(),
            next_handle: 0,
            state: DrawState {
                viewport: Viewport::new(0, 0, size.width, size.height),
                shader: ShaderId::INVALID,
                blend: BlendMode::Alpha,
                texture: TextureId::INVALID,
                mvp_slot: None,
            },
            mvps: Vec::with_capacity(MVP_SLOTS),
            draws: Vec::new(),
            pending_clear: Some(wgpu::Color::TRANSPARENT),
        }
    }

    /// Acquire a headless device and build the backend on it.
    pub fn headless(width: u32, height: u32) -> Result<Self, RendererError> {
        let gpu = GpuContext::new_headless_blocking()?;
        Ok(Self::new(gpu, width, height))
    }

    pub fn size(&self) -> PhysicalSize {
        self.size
    }

    /// Clear the target to `color` before the next batch is drawn.
    pub fn clear(&mut self, color: Color) {
        self.pending_clear = Some(wgpu::Color {
            r: color.r as f64 / 255.0,
            g: color.g as f64 / 255.0,
            b: color.b as f64 / 255.0,
            a: color.a as f64 / 255.0,
        });
    }

    /// Copy the target back to host memory as tightly packed RGBA8 rows.
    pub fn read_pixels(&self) -> Result<Vec<u8>, RendererError> {
        let PhysicalSize { width, height } = self.size;
        let unpadded = width as u64 * 4;
        let padded = types::align_to(unpadded, wgpu::COPY_BYTES_PER_ROW_ALIGNMENT as u64);

        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("batch readback"),
            size: padded * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("batch readback encoder"),
            });
        encoder.copy_texture_to_buffer(
            self.target.as_image_copy(),
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded as u32),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(Some(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        let _ = self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|e| RendererError::ReadbackError(e.to_string()))?
            .map_err(|e| RendererError::ReadbackError(e.to_string()))?;

        let mut pixels = Vec::with_capacity((unpadded * height as u64) as usize);
        {
            let data = slice.get_mapped_range();
            for row in data.chunks(padded as usize) {
                pixels.extend_from_slice(&row[..unpadded as usize]);
            }
        }
        readback.unmap();
        Ok(pixels)
    }

    fn next_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }

    fn pipeline_key(&self, op: &DrawOp) -> PipelineKey {
        let shader = if self.shaders.contains_key(&op.shader) {
            op.shader
        } else {
            ShaderId::INVALID
        };
        PipelineKey {
            shader,
            blend: op.blend,
            topology: types::primitive_topology(&op.command),
        }
    }

    fn ensure_pipeline(&mut self, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }
        let Some(module) = self.shaders.get(&key.shader) else {
            return;
        };
        let pipeline = pipeline::create_pipeline(
            &self.device,
            &self.pipeline_layout,
            module,
            TARGET_FORMAT,
            key.blend,
            key.topology,
        );
        self.pipelines.insert(key, pipeline);
    }

    fn compile(&mut self, source: &ShaderSource) -> Result<ShaderId, BackendError> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(source.label.as_str()),
                source: wgpu::ShaderSource::Wgsl(source.code.as_str().into()),
            });
        // Building one pipeline also validates the entry points and bindings
        let probe = pipeline::create_pipeline(
            &self.device,
            &self.pipeline_layout,
            &module,
            TARGET_FORMAT,
            BlendMode::Alpha,
            wgpu::PrimitiveTopology::TriangleList,
        );
        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(BackendError::Shader(format!("{}: {err}", source.label)));
        }

        let id = ShaderId(self.next_handle());
        self.shaders.insert(id, module);
        self.pipelines.insert(
            PipelineKey {
                shader: id,
                blend: BlendMode::Alpha,
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
            probe,
        );
        Ok(id)
    }

    fn mvp_slot(&mut self) -> usize {
        match self.state.mvp_slot {
            Some(slot) => slot,
            None => {
                self.set_mvp(&quadbatch_core::matrix::IDENTITY);
                self.state.mvp_slot.unwrap_or(0)
            }
        }
    }
}

impl GraphicsBackend for WgpuBackend {
    fn load_texture(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<TextureId, BackendError> {
        let max = self.device.limits().max_texture_dimension_2d;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(BackendError::Texture(format!(
                "invalid size {width}x{height} (max {max})"
            )));
        }
        let needed = format.data_size(width, height);
        if pixels.len() < needed {
            return Err(BackendError::Texture(format!(
                "expected {needed} bytes of {format:?}, got {}",
                pixels.len()
            )));
        }

        let colors = StandardCodec.decode(&pixels[..needed], format)?;
        let rgba: Vec<u8> = colors.iter().flat_map(|c| c.to_array()).collect();

        let entry = create_texture_entry(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            &rgba,
            width,
            height,
        );
        let id = TextureId(self.next_handle());
        self.textures.insert(id, entry);
        Ok(id)
    }

    fn unload_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_none() {
            tracing::debug!(%id, "unload of unknown texture");
        }
    }

    fn load_default_shader(&mut self) -> Result<ShaderId, BackendError> {
        self.compile(&ShaderSource::new("default", DEFAULT_SHADER_SOURCE))
    }

    fn load_shader(&mut self, source: &ShaderSource) -> Result<ShaderId, BackendError> {
        self.compile(source)
    }

    fn unload_shader(&mut self, id: ShaderId) {
        if id == ShaderId::INVALID {
            return;
        }
        self.shaders.remove(&id);
        self.pipelines.retain(|key, _| key.shader != id);
    }

    fn load_vertex_buffer(
        &mut self,
        capacity: usize,
        indices: &[u32],
    ) -> Result<BufferId, BackendError> {
        let size = (capacity * std::mem::size_of::<GpuVertex>()) as u64;
        let max = self.device.limits().max_buffer_size;
        if capacity == 0 || size > max || indices.is_empty() {
            return Err(BackendError::Buffer(format!(
                "cannot allocate {capacity} vertices ({size} bytes, max {max})"
            )));
        }

        let vertices = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("batch vertices"),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("batch indices"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let id = BufferId(self.next_handle());
        self.buffers.insert(
            id,
            GpuBuffer {
                vertices,
                indices: index_buffer,
                capacity,
            },
        );
        Ok(id)
    }

    fn unload_vertex_buffer(&mut self, id: BufferId) {
        if let Some(buffer) = self.buffers.remove(&id) {
            buffer.vertices.destroy();
            buffer.indices.destroy();
        }
    }

    fn upload_vertices(&mut self, buffer: BufferId, streams: VertexStreams<'_>) {
        let Some(target) = self.buffers.get(&buffer) else {
            tracing::warn!(%buffer, "upload to unknown vertex buffer");
            return;
        };
        let mut vertices = types::interleave(streams);
        if vertices.len() > target.capacity {
            tracing::warn!(
                %buffer,
                vertices = vertices.len(),
                capacity = target.capacity,
                "upload truncated to buffer capacity"
            );
            vertices.truncate(target.capacity);
        }
        if !vertices.is_empty() {
            self.queue
                .write_buffer(&target.vertices, 0, bytemuck::cast_slice(&vertices));
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
    }

    fn use_shader(&mut self, shader: ShaderId) {
        self.state.shader = shader;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn set_mvp(&mut self, mvp: &Mat4) {
        if self.mvps.len() >= MVP_SLOTS {
            tracing::warn!(slots = MVP_SLOTS, "out of MVP slots, reusing the last one");
            self.mvps.pop();
        }
        self.mvps.push(*mvp);
        self.state.mvp_slot = Some(self.mvps.len() - 1);
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureId) {
        if unit == 0 {
            self.state.texture = texture;
        } else {
            // The built-in shader samples unit 0 only
            tracing::trace!(unit, %texture, "auxiliary texture ignored");
        }
    }

    fn draw(&mut self, buffer: BufferId, command: DrawCommand) {
        let mvp_slot = self.mvp_slot();
        self.draws.push(DrawOp {
            buffer,
            command,
            shader: self.state.shader,
            blend: self.state.blend,
            texture: self.state.texture,
            mvp_slot,
            viewport: self.state.viewport,
        });
    }

    fn end_batch(&mut self) {
        let draws = std::mem::take(&mut self.draws);
        let mvps = std::mem::take(&mut self.mvps);
        self.state.mvp_slot = None;
        if draws.is_empty() {
            return;
        }

        for (slot, mvp) in mvps.iter().enumerate() {
            self.queue.write_buffer(
                &self.uniform_buffer,
                slot as u64 * self.uniform_stride,
                bytemuck::bytes_of(&MvpUniform { mvp: *mvp }),
            );
        }

        let keys: Vec<PipelineKey> = draws.iter().map(|op| self.pipeline_key(op)).collect();
        for key in &keys {
            self.ensure_pipeline(*key);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("batch encoder"),
            });
        {
            let load = match self.pending_clear.take() {
                Some(color) => wgpu::LoadOp::Clear(color),
                None => wgpu::LoadOp::Load,
            };
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("batch pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.target_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for (op, key) in draws.iter().zip(&keys) {
                let Some(pipeline) = self.pipelines.get(key) else {
                    continue;
                };
                let Some(buffer) = self.buffers.get(&op.buffer) else {
                    tracing::warn!(buffer = %op.buffer, "draw from unknown vertex buffer skipped");
                    continue;
                };
                let texture = self
                    .textures
                    .get(&op.texture)
                    .unwrap_or(&self.fallback_texture);
                let vp = types::clamp_viewport(op.viewport, self.size);

                pass.set_viewport(
                    vp.x as f32,
                    vp.y as f32,
                    vp.width as f32,
                    vp.height as f32,
                    0.0,
                    1.0,
                );
                pass.set_pipeline(pipeline);
                pass.set_bind_group(
                    0,
                    &self.uniform_bind_group,
                    &[(op.mvp_slot as u64 * self.uniform_stride) as u32],
                );
                pass.set_bind_group(1, &texture.bind_group, &[]);
                pass.set_vertex_buffer(0, buffer.vertices.slice(..));

                match op.command {
                    DrawCommand::Arrays { first, count, .. } => {
                        pass.draw(first..first + count, 0..1);
                    }
                    DrawCommand::Indexed {
                        first_index,
                        index_count,
                    } => {
                        pass.set_index_buffer(
                            buffer.indices.slice(..),
                            wgpu::IndexFormat::Uint32,
                        );
                        pass.draw_indexed(first_index..first_index + index_count, 0, 0..1);
                    }
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        tracing::trace!(draws = draws.len(), "batch submitted");
    }
}

fn create_texture_entry(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    rgba: &[u8],
    width: u32,
    height: u32,
) -> TextureEntry {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("batch texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        texture.as_image_copy(),
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("batch texture bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    TextureEntry {
        _texture: texture,
        bind_group,
    }
}

#[cfg(test)]
mod tests {
    use super::pipeline::*;
    use super::types::*;
    use quadbatch_common::Viewport;
    use quadbatch_core::{BlendMode, DrawCommand, Topology, VertexStreams};

    use crate::gpu::PhysicalSize;

    #[test]
    fn gpu_vertex_size() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24); // 5 floats + 4 bytes
    }

    #[test]
    fn mvp_uniform_size() {
        assert_eq!(std::mem::size_of::<MvpUniform>(), 64); // 16 floats * 4 bytes
    }

    #[test]
    fn vertex_layout_offsets() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 24);
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 20]);
        assert_eq!(layout.attributes[2].format, wgpu::VertexFormat::Unorm8x4);
    }

    #[test]
    fn blend_states_match_modes() {
        assert_eq!(blend_state(BlendMode::Alpha), wgpu::BlendState::ALPHA_BLENDING);
        assert_eq!(
            blend_state(BlendMode::AlphaPremultiply),
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING
        );

        let additive = blend_state(BlendMode::Additive);
        assert_eq!(additive.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(additive.color.dst_factor, wgpu::BlendFactor::One);

        let subtract = blend_state(BlendMode::SubtractColors);
        assert_eq!(subtract.color.operation, wgpu::BlendOperation::Subtract);

        let multiplied = blend_state(BlendMode::Multiplied);
        assert_eq!(multiplied.color.src_factor, wgpu::BlendFactor::Dst);
    }

    #[test]
    fn topology_follows_command() {
        let lines = DrawCommand::Arrays {
            topology: Topology::Lines,
            first: 0,
            count: 2,
        };
        let quads = DrawCommand::Indexed {
            first_index: 0,
            index_count: 6,
        };
        assert_eq!(primitive_topology(&lines), wgpu::PrimitiveTopology::LineList);
        assert_eq!(primitive_topology(&quads), wgpu::PrimitiveTopology::TriangleList);
    }

    #[test]
    fn align_to_rounds_up() {
        assert_eq!(align_to(64, 256), 256);
        assert_eq!(align_to(256, 256), 256);
        assert_eq!(align_to(257, 256), 512);
        assert_eq!(align_to(10, 0), 10);
    }

    #[test]
    fn interleave_fills_missing_attributes() {
        let positions = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let texcoords = [[0.5, 0.25]];
        let colors = [[1, 2, 3, 4]];
        let out = interleave(VertexStreams {
            positions: &positions,
            texcoords: &texcoords,
            colors: &colors,
        });
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].texcoord, [0.5, 0.25]);
        assert_eq!(out[1].texcoord, [0.0, 0.0]);
        assert_eq!(out[1].color, [255, 255, 255, 255]);
    }

    #[test]
    fn viewport_is_clipped_to_target() {
        let size = PhysicalSize {
            width: 100,
            height: 50,
        };
        assert_eq!(
            clamp_viewport(Viewport::new(50, 0, 100, 50), size),
            Viewport::new(50, 0, 50, 50)
        );
        assert_eq!(
            clamp_viewport(Viewport::new(0, 0, 0, 0), size),
            Viewport::new(0, 0, 1, 1)
        );
        assert_eq!(
            clamp_viewport(Viewport::new(500, 500, 10, 10), size),
            Viewport::new(99, 49, 1, 1)
        );
    }

    #[test]
    fn default_shader_declares_entry_points() {
        assert!(DEFAULT_SHADER_SOURCE.contains("fn vs_main"));
        assert!(DEFAULT_SHADER_SOURCE.contains("fn fs_main"));
        assert!(DEFAULT_SHADER_SOURCE.contains("mvp: mat4x4<f32>"));
    }
}
