//! Folio Rendering Library
//!
//! This crate provides the wgpu-based rendering for the preloader's event
//! horizon scene and the orbit node overlay.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::SceneCamera`] - Perspective camera fed by the scene rig
//! - [`pipeline::DiskPipeline`] - Layered accretion disk
//! - [`pipeline::ParticlePipeline`] - Swirl/infall/star particle fields
//! - [`pipeline::NodePipeline`] - Orbit node overlay (instanced quads)
//!
//! The scene draws into an offscreen target sized by the preset's
//! resolution range (multisampled when the preset antialiases) and is
//! blitted onto the surface. All fidelity knobs come from the active
//! [`folio_scene::ScenePreset`]; a quality downgrade rebuilds buffers,
//! target, and sample state once via [`pipeline::ScenePipelines::rebuild`].

pub mod camera;
pub mod context;
pub mod geometry;
pub mod pipeline;

pub use camera::SceneCamera;
pub use context::RenderContext;
pub use pipeline::nodes::node_instance;
pub use pipeline::types::{NodeInstance, SceneUniforms};
pub use pipeline::{
    DiskPipeline, HorizonPipeline, NodePipeline, ParticleKind, ParticlePipeline, ScenePipelines,
};
