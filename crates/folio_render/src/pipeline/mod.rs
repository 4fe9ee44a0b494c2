//! Render pipelines for the scene and overlay passes

pub mod disk;
pub mod horizon;
pub mod nodes;
pub mod particles;
pub mod types;

pub use disk::DiskPipeline;
pub use horizon::HorizonPipeline;
pub use nodes::NodePipeline;
pub use particles::{ParticleKind, ParticlePipeline};

use folio_scene::ScenePreset;

use types::SceneUniforms;

/// Shared per-frame uniform buffer and its bind group, used by every scene
/// pipeline.
pub struct SceneBinding {
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
    buffer: wgpu::Buffer,
}

impl SceneBinding {
    pub fn new(device: &wgpu::Device) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene uniforms layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene uniforms bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            layout,
            bind_group,
            buffer,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

/// Offscreen color target the scene renders into before being blitted to
/// the surface. Its extent is the surface size scaled by the preset's
/// clamped pixel ratio; when the preset antialiases, drawing goes through
/// a 4x attachment that resolves into the sampled texture.
pub struct SceneTarget {
    pub view: wgpu::TextureView,
    msaa_view: Option<wgpu::TextureView>,
    pub width: u32,
    pub height: u32,
}

impl SceneTarget {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        surface_width: u32,
        surface_height: u32,
        pixel_ratio: f32,
        preset: &ScenePreset,
    ) -> Self {
        let (width, height) =
            scaled_extent(surface_width, surface_height, pixel_ratio, preset);
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let color = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene target"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let samples = preset.msaa_samples();
        let msaa_view = (samples > 1).then(|| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some("scene msaa target"),
                    size,
                    mip_level_count: 1,
                    sample_count: samples,
                    dimension: wgpu::TextureDimension::D2,
                    format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        });

        Self {
            view: color.create_view(&wgpu::TextureViewDescriptor::default()),
            msaa_view,
            width,
            height,
        }
    }
}

/// Scene target extent: the surface scaled so the effective pixel ratio
/// lands inside the preset's render range.
fn scaled_extent(
    surface_width: u32,
    surface_height: u32,
    pixel_ratio: f32,
    preset: &ScenePreset,
) -> (u32, u32) {
    let ratio = pixel_ratio.max(f32::EPSILON);
    let scale = preset.clamped_pixel_ratio(pixel_ratio) / ratio;
    (
        ((surface_width as f32 * scale).round() as u32).max(1),
        ((surface_height as f32 * scale).round() as u32).max(1),
    )
}

/// Upscales the finished scene target onto the surface with a fullscreen
/// triangle.
pub struct BlitPipeline {
    pipeline: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    bind_group: wgpu::BindGroup,
}

impl BlitPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        target: &wgpu::TextureView,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/blit.wgsl").into()),
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("blit layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blit pipeline layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("blit pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("blit sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group = Self::bind(device, &layout, &sampler, target);

        Self {
            pipeline,
            layout,
            sampler,
            bind_group,
        }
    }

    /// Point the blit at a freshly created scene target.
    pub fn retarget(&mut self, device: &wgpu::Device, target: &wgpu::TextureView) {
        self.bind_group = Self::bind(device, &self.layout, &self.sampler, target);
    }

    fn bind(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        target: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("blit bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(target),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

/// Everything needed to draw the preloader scene: the shared binding, the
/// scaled offscreen target, the horizon, the disk, the three particle
/// fields, and the blit to the surface. Buffer sizes, the target extent,
/// and the multisample count all come from the active preset; a quality
/// downgrade calls [`ScenePipelines::rebuild`] once.
pub struct ScenePipelines {
    pub binding: SceneBinding,
    pub horizon: HorizonPipeline,
    pub disk: DiskPipeline,
    pub swirl: ParticlePipeline,
    pub infall: ParticlePipeline,
    pub stars: ParticlePipeline,
    target: SceneTarget,
    blit: BlitPipeline,
    format: wgpu::TextureFormat,
    samples: u32,
    surface_width: u32,
    surface_height: u32,
    pixel_ratio: f32,
}

impl ScenePipelines {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        preset: &ScenePreset,
        seed: u64,
        surface_width: u32,
        surface_height: u32,
        pixel_ratio: f32,
    ) -> Self {
        let samples = preset.msaa_samples();
        let binding = SceneBinding::new(device);
        let horizon = HorizonPipeline::new(device, format, &binding.layout, preset, samples);
        let disk = DiskPipeline::new(device, format, &binding.layout, preset, samples);
        let swirl = ParticlePipeline::new(
            device, format, &binding.layout, ParticleKind::Swirl, preset, seed, samples,
        );
        let infall = ParticlePipeline::new(
            device, format, &binding.layout, ParticleKind::Infall, preset, seed, samples,
        );
        let stars = ParticlePipeline::new(
            device, format, &binding.layout, ParticleKind::Stars, preset, seed, samples,
        );

        let target = SceneTarget::new(
            device, format, surface_width, surface_height, pixel_ratio, preset,
        );
        let blit = BlitPipeline::new(device, format, &target.view);

        log::info!(
            "scene target {}x{} ({}x msaa) for {}x{} surface",
            target.width,
            target.height,
            samples,
            surface_width,
            surface_height
        );

        Self {
            binding,
            horizon,
            disk,
            swirl,
            infall,
            stars,
            target,
            blit,
            format,
            samples,
            surface_width,
            surface_height,
            pixel_ratio,
        }
    }

    /// Rebuild for a new preset. Seed and geometry buffers are resized in
    /// place; if the multisample count changes the pipelines themselves are
    /// recreated, since the sample state is baked in. The scene target is
    /// always re-sized for the new resolution range.
    pub fn rebuild(&mut self, device: &wgpu::Device, preset: &ScenePreset, seed: u64) {
        log::info!(
            "rebuilding scene buffers: swirl={} infall={} stars={} disk={}x{}",
            preset.swirl_particles,
            preset.infall_particles,
            preset.star_particles,
            preset.disk_layers,
            preset.disk_segments
        );

        let samples = preset.msaa_samples();
        if samples != self.samples {
            self.samples = samples;
            self.horizon =
                HorizonPipeline::new(device, self.format, &self.binding.layout, preset, samples);
            self.disk =
                DiskPipeline::new(device, self.format, &self.binding.layout, preset, samples);
            self.swirl = ParticlePipeline::new(
                device, self.format, &self.binding.layout, ParticleKind::Swirl, preset, seed, samples,
            );
            self.infall = ParticlePipeline::new(
                device, self.format, &self.binding.layout, ParticleKind::Infall, preset, seed, samples,
            );
            self.stars = ParticlePipeline::new(
                device, self.format, &self.binding.layout, ParticleKind::Stars, preset, seed, samples,
            );
        } else {
            self.horizon.rebuild(device, preset);
            self.disk.rebuild(device, preset);
            self.swirl.rebuild(device, preset, seed);
            self.infall.rebuild(device, preset, seed);
            self.stars.rebuild(device, preset, seed);
        }

        self.retarget(device, preset);
    }

    /// Re-size the scene target after a surface resize.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        preset: &ScenePreset,
        surface_width: u32,
        surface_height: u32,
        pixel_ratio: f32,
    ) {
        if surface_width == 0 || surface_height == 0 {
            return;
        }
        self.surface_width = surface_width;
        self.surface_height = surface_height;
        self.pixel_ratio = pixel_ratio;
        self.retarget(device, preset);
    }

    fn retarget(&mut self, device: &wgpu::Device, preset: &ScenePreset) {
        self.target = SceneTarget::new(
            device,
            self.format,
            self.surface_width,
            self.surface_height,
            self.pixel_ratio,
            preset,
        );
        self.blit.retarget(device, &self.target.view);
    }

    /// Record the full scene: one pass into the scaled target (clearing to
    /// black, resolving multisamples), then the blit onto the surface.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let (attachment, resolve_target) = match &self.target.msaa_view {
            Some(msaa) => (msaa, Some(&self.target.view)),
            None => (&self.target.view, None),
        };

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: attachment,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.binding.bind_group, &[]);
            // Back to front: stars, the horizon itself, the disk, then the
            // bright fields on top.
            self.stars.draw(&mut pass);
            self.horizon.draw(&mut pass);
            self.disk.draw(&mut pass);
            self.swirl.draw(&mut pass);
            self.infall.draw(&mut pass);
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("blit pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        self.blit.draw(&mut pass);
    }
}
