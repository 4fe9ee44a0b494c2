//! Orbit node overlay pipeline

use wgpu::util::DeviceExt;

use folio_orbit::NodeVisual;

use crate::geometry;
use crate::pipeline::types::{MeshVertex, NodeInstance, OverlayUniforms};

/// Most nodes the overlay will ever hold; the catalog stays well under it.
const MAX_NODES: usize = 64;

/// Screen-space instanced quads for the stack orbit. Instances are
/// rewritten every frame from the orbit system's composed visuals.
pub struct NodePipeline {
    pipeline: wgpu::RenderPipeline,
    quad_vertices: wgpu::Buffer,
    quad_indices: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_count: u32,
}

impl NodePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("node shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/nodes.wgsl").into()),
        });

        let bind_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("overlay uniforms layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("node pipeline layout"),
            bind_group_layouts: &[&bind_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("node pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout(), NodeInstance::layout()],
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
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (quad, indices) = geometry::unit_quad();
        let quad_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("node quad"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("node quad indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("node instances"),
            size: (MAX_NODES * std::mem::size_of::<NodeInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("overlay uniforms"),
            size: std::mem::size_of::<OverlayUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("overlay bind group"),
            layout: &bind_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            quad_vertices,
            quad_indices,
            instance_buffer,
            uniform_buffer,
            bind_group,
            instance_count: 0,
        }
    }

    /// Update the viewport mapping. The orbit is centered in the window.
    pub fn set_viewport(&self, queue: &wgpu::Queue, width: f32, height: f32) {
        let uniforms = OverlayUniforms {
            viewport: [width, height],
            center: [width / 2.0, height / 2.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Rewrite instance data for this frame. Instances past `MAX_NODES`
    /// are dropped.
    pub fn update(&mut self, queue: &wgpu::Queue, instances: &[NodeInstance]) {
        let instances = &instances[..instances.len().min(MAX_NODES)];
        self.instance_count = instances.len() as u32;
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    /// Draw the overlay on top of the current frame contents.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        if self.instance_count == 0 {
            return;
        }
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("node overlay pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.quad_vertices.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.quad_indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..6, 0, 0..self.instance_count);
    }
}

/// Build an overlay instance from a composed orbit visual and a category
/// accent color.
pub fn node_instance(visual: &NodeVisual, accent: [f32; 3]) -> NodeInstance {
    NodeInstance {
        translate: visual.translate,
        scale: visual.scale,
        opacity: visual.opacity,
        accent,
        z_layer: visual.z_layer as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_orbit::{NodeFlags, NodePlacement, NodeVisual, RingState};

    #[test]
    fn test_node_instance_carries_visual_through() {
        let state = RingState::with_phase(0.0);
        let placement = NodePlacement::on_ring(&state, 0, 4, 100.0);
        let visual = NodeVisual::compose(placement, NodeFlags::INSPECTED);
        let instance = node_instance(&visual, [0.2, 0.4, 0.9]);

        assert_eq!(instance.translate, visual.translate);
        assert_eq!(instance.scale, visual.scale);
        assert_eq!(instance.opacity, visual.opacity);
        assert_eq!(instance.z_layer, visual.z_layer as f32);
        assert_eq!(instance.accent, [0.2, 0.4, 0.9]);
    }
}
