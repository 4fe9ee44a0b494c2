//! Event horizon core and photon ring pipeline

use wgpu::util::DeviceExt;

use folio_scene::ScenePreset;

use crate::geometry;
use crate::pipeline::types::MeshVertex;

const CORE_RADIUS: f32 = 1.34;
const PHOTON_INNER: f32 = 1.36;
const PHOTON_OUTER: f32 = 1.54;

/// Draws the black core disc and the photon ring annulus. Segment counts
/// come from the preset.
pub struct HorizonPipeline {
    pipeline: wgpu::RenderPipeline,
    core_vertices: wgpu::Buffer,
    core_indices: wgpu::Buffer,
    core_index_count: u32,
    ring_vertices: wgpu::Buffer,
    ring_indices: wgpu::Buffer,
    ring_index_count: u32,
}

impl HorizonPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        preset: &ScenePreset,
        samples: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("horizon shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/horizon.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("horizon pipeline layout"),
            bind_group_layouts: &[scene_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("horizon pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout()],
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

        let (core_vertices, core_indices, core_index_count) =
            upload_mesh(device, geometry::disc(CORE_RADIUS, preset.singularity_segments));
        let (ring_vertices, ring_indices, ring_index_count) = upload_mesh(
            device,
            geometry::annulus(PHOTON_INNER, PHOTON_OUTER, preset.ring_segments),
        );

        Self {
            pipeline,
            core_vertices,
            core_indices,
            core_index_count,
            ring_vertices,
            ring_indices,
            ring_index_count,
        }
    }

    /// Re-tessellate for a new preset.
    pub fn rebuild(&mut self, device: &wgpu::Device, preset: &ScenePreset) {
        let (v, i, n) = upload_mesh(device, geometry::disc(CORE_RADIUS, preset.singularity_segments));
        self.core_vertices = v;
        self.core_indices = i;
        self.core_index_count = n;

        let (v, i, n) = upload_mesh(
            device,
            geometry::annulus(PHOTON_INNER, PHOTON_OUTER, preset.ring_segments),
        );
        self.ring_vertices = v;
        self.ring_indices = i;
        self.ring_index_count = n;
    }

    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);

        pass.set_vertex_buffer(0, self.core_vertices.slice(..));
        pass.set_index_buffer(self.core_indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.core_index_count, 0, 0..1);

        pass.set_vertex_buffer(0, self.ring_vertices.slice(..));
        pass.set_index_buffer(self.ring_indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.ring_index_count, 0, 0..1);
    }
}

fn upload_mesh(
    device: &wgpu::Device,
    mesh: geometry::AnnulusMesh,
) -> (wgpu::Buffer, wgpu::Buffer, u32) {
    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("horizon vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("horizon indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    (vertices, indices, mesh.indices.len() as u32)
}
