//! Instanced particle field pipelines
//!
//! One pipeline per field. The seed buffer is generated on the CPU once
//! per preset and never touched again; all motion is shader-side.

use wgpu::util::DeviceExt;

use folio_scene::{field, ScenePreset};

use crate::geometry;
use crate::pipeline::types::MeshVertex;

/// Which particle field a pipeline draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Swirl,
    Infall,
    Stars,
}

impl ParticleKind {
    fn vertex_entry(self) -> &'static str {
        match self {
            ParticleKind::Swirl => "vs_swirl",
            ParticleKind::Infall => "vs_infall",
            ParticleKind::Stars => "vs_star",
        }
    }

    fn count(self, preset: &ScenePreset) -> u32 {
        match self {
            ParticleKind::Swirl => preset.swirl_particles,
            ParticleKind::Infall => preset.infall_particles,
            ParticleKind::Stars => preset.star_particles,
        }
    }

    /// Instance attribute layout matching the field's seed struct.
    fn seed_layout(self) -> wgpu::VertexBufferLayout<'static> {
        // Swirl and infall seeds are six packed f32s; stars are two
        // padded vec3s.
        match self {
            ParticleKind::Swirl | ParticleKind::Infall => wgpu::VertexBufferLayout {
                array_stride: 24,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 2,
                        format: wgpu::VertexFormat::Float32,
                    },
                    wgpu::VertexAttribute {
                        offset: 4,
                        shader_location: 3,
                        format: wgpu::VertexFormat::Float32,
                    },
                    wgpu::VertexAttribute {
                        offset: 8,
                        shader_location: 4,
                        format: wgpu::VertexFormat::Float32,
                    },
                    wgpu::VertexAttribute {
                        offset: 12,
                        shader_location: 5,
                        format: wgpu::VertexFormat::Float32,
                    },
                    wgpu::VertexAttribute {
                        offset: 16,
                        shader_location: 6,
                        format: wgpu::VertexFormat::Float32,
                    },
                    wgpu::VertexAttribute {
                        offset: 20,
                        shader_location: 7,
                        format: wgpu::VertexFormat::Float32,
                    },
                ],
            },
            ParticleKind::Stars => wgpu::VertexBufferLayout {
                array_stride: 32,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 2,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                    wgpu::VertexAttribute {
                        offset: 16,
                        shader_location: 3,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                ],
            },
        }
    }
}

/// Additive-blended billboard quads, one instance per seed.
pub struct ParticlePipeline {
    kind: ParticleKind,
    pipeline: wgpu::RenderPipeline,
    quad_vertices: wgpu::Buffer,
    quad_indices: wgpu::Buffer,
    seed_buffer: wgpu::Buffer,
    instance_count: u32,
}

impl ParticlePipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        kind: ParticleKind,
        preset: &ScenePreset,
        seed: u64,
        samples: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/particles.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle pipeline layout"),
            bind_group_layouts: &[scene_layout],
            push_constant_ranges: &[],
        });

        // Additive blending: particles only ever brighten the frame.
        let blend = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(kind.vertex_entry()),
                buffers: &[MeshVertex::layout(), kind.seed_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_glow"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: samples,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        let (quad, indices) = geometry::unit_quad();
        let quad_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle quad"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle quad indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let (seed_buffer, instance_count) = build_seeds(device, kind, preset, seed);

        Self {
            kind,
            pipeline,
            quad_vertices,
            quad_indices,
            seed_buffer,
            instance_count,
        }
    }

    /// Reseed for a new preset's particle count.
    pub fn rebuild(&mut self, device: &wgpu::Device, preset: &ScenePreset, seed: u64) {
        let (seed_buffer, instance_count) = build_seeds(device, self.kind, preset, seed);
        self.seed_buffer = seed_buffer;
        self.instance_count = instance_count;
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.quad_vertices.slice(..));
        pass.set_vertex_buffer(1, self.seed_buffer.slice(..));
        pass.set_index_buffer(self.quad_indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..6, 0, 0..self.instance_count);
    }
}

fn build_seeds(
    device: &wgpu::Device,
    kind: ParticleKind,
    preset: &ScenePreset,
    seed: u64,
) -> (wgpu::Buffer, u32) {
    let count = kind.count(preset);
    let contents: Vec<u8> = match kind {
        ParticleKind::Swirl => bytemuck::cast_slice(&field::seed_swirl(count, seed)).to_vec(),
        ParticleKind::Infall => {
            bytemuck::cast_slice(&field::seed_infall(count, seed.wrapping_add(1))).to_vec()
        }
        ParticleKind::Stars => {
            bytemuck::cast_slice(&field::seed_stars(count, seed.wrapping_add(2))).to_vec()
        }
    };

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle seeds"),
        contents: &contents,
        usage: wgpu::BufferUsages::VERTEX,
    });
    (buffer, count)
}
