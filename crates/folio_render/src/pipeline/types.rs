//! GPU-facing data structures
//!
//! Every struct here crosses the CPU/GPU boundary as-is, so layouts are
//! `#[repr(C)]` and padded to the alignment WGSL expects. The size tests
//! pin the layouts; changing a struct means updating its shader twin.

use bytemuck::{Pod, Zeroable};

use crate::camera::Mat4;

/// Per-frame uniforms shared by every scene pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view: Mat4,
    pub proj: Mat4,
    /// Camera eye in world space; w holds elapsed seconds.
    pub eye_time: [f32; 4],
    /// x: collapse progress, y: zoom scale, z: scene alpha, w: unused.
    pub phase: [f32; 4],
}

impl SceneUniforms {
    pub fn new() -> Self {
        Self {
            view: identity(),
            proj: identity(),
            eye_time: [0.0, 0.35, 6.95, 0.0],
            phase: [0.0, 1.0, 1.0, 0.0],
        }
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// One accretion disk layer. Stored as instance data; the annulus mesh is
/// drawn once per layer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct DiskInstance {
    /// 0 at the innermost layer, 1 at the outermost.
    pub layer_mix: f32,
    /// Vertical offset of this layer, world units.
    pub y_offset: f32,
    /// Radial scale relative to the base annulus.
    pub scale: f32,
    pub _pad: f32,
}

impl DiskInstance {
    /// Spread `count` layers into a thin stack, widening outward.
    pub fn stack(count: u32) -> Vec<Self> {
        let count = count.max(1);
        (0..count)
            .map(|i| {
                let mix = if count == 1 {
                    0.0
                } else {
                    i as f32 / (count - 1) as f32
                };
                Self {
                    layer_mix: mix,
                    y_offset: (mix - 0.5) * 0.22,
                    scale: 1.0 + mix * 0.16,
                    _pad: 0.0,
                }
            })
            .collect()
    }
}

/// Shared 2D mesh vertex: position plus UV.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// One orbit node billboard in the overlay pass.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct NodeInstance {
    /// Offset from the orbit center, logical pixels.
    pub translate: [f32; 2],
    pub scale: f32,
    pub opacity: f32,
    /// Category accent color.
    pub accent: [f32; 3],
    /// Draw-order layer; raised nodes sit above resting ones.
    pub z_layer: f32,
}

impl NodeInstance {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<NodeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 28,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniforms for the screen-space overlay pass.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct OverlayUniforms {
    /// Logical viewport size in pixels.
    pub viewport: [f32; 2],
    /// Orbit center in logical pixels.
    pub center: [f32; 2],
}

fn identity() -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}
