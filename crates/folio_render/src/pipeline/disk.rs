//! Layered accretion disk pipeline

use wgpu::util::DeviceExt;

use folio_scene::ScenePreset;

use crate::geometry;
use crate::pipeline::types::{DiskInstance, MeshVertex};

const INNER_RADIUS: f32 = 1.16;
const OUTER_RADIUS: f32 = 4.05;

/// Draws the annulus mesh once per disk layer, instanced. Segment and
/// layer counts come from the preset.
pub struct DiskPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    index_count: u32,
    layer_count: u32,
}

impl DiskPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        preset: &ScenePreset,
        samples: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("disk shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/disk.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("disk pipeline layout"),
            bind_group_layouts: &[scene_layout],
            push_constant_ranges: &[],
        });

        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<DiskInstance>() as wgpu::BufferAddress,
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
            ],
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("disk pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout(), instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
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

        let (vertex_buffer, index_buffer, index_count) = build_mesh(device, preset);
        let (instance_buffer, layer_count) = build_layers(device, preset);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            index_count,
            layer_count,
        }
    }

    /// Re-tessellate for a new preset.
    pub fn rebuild(&mut self, device: &wgpu::Device, preset: &ScenePreset) {
        let (vertex_buffer, index_buffer, index_count) = build_mesh(device, preset);
        let (instance_buffer, layer_count) = build_layers(device, preset);
        self.vertex_buffer = vertex_buffer;
        self.index_buffer = index_buffer;
        self.instance_buffer = instance_buffer;
        self.index_count = index_count;
        self.layer_count = layer_count;
    }

    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.index_count, 0, 0..self.layer_count);
    }
}

fn build_mesh(
    device: &wgpu::Device,
    preset: &ScenePreset,
) -> (wgpu::Buffer, wgpu::Buffer, u32) {
    let mesh = geometry::annulus(INNER_RADIUS, OUTER_RADIUS, preset.disk_segments);

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("disk vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("disk indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    (vertex_buffer, index_buffer, mesh.indices.len() as u32)
}

fn build_layers(device: &wgpu::Device, preset: &ScenePreset) -> (wgpu::Buffer, u32) {
    let layers = DiskInstance::stack(preset.disk_layers);
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("disk layers"),
        contents: bytemuck::cast_slice(&layers),
        usage: wgpu::BufferUsages::VERTEX,
    });
    (buffer, layers.len() as u32)
}
