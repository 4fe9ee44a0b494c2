//! Folio - Portfolio Presentation Engine
//!
//! An adaptive "event horizon" preloader followed by a three-ring stack
//! orbit with hover inspection and scroll-revealed sections.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use folio::config::AppConfig;
use folio::systems::{accent_for, pick_node, FrameClock};
use folio_content::{Catalog, StackRegistry};
use folio_orbit::{OrbitFrame, OrbitSystem, RingId, RingMotion, ViewMode};
use folio_render::{
    node_instance, NodeInstance, NodePipeline, RenderContext, SceneCamera, ScenePipelines,
    SceneUniforms,
};
use folio_reveal::{Choreographer, RevealBatch, RevealTrigger};
use folio_scene::{
    pick_tier, CameraRig, CollapseTimeline, DeviceProfile, PerformanceWatchdog, QualityGovernor,
    ScenePreset, WatchdogVerdict,
};

/// Logical pixels of document scroll per wheel line.
const SCROLL_LINE: f32 = 48.0;

/// Document offsets of the portfolio sections, in presentation order.
const SECTIONS: [(&str, f32); 5] = [
    ("hero", 0.0),
    ("about", 900.0),
    ("skills", 1800.0),
    ("projects", 2700.0),
    ("experience", 3600.0),
];

/// Live state while the preloader scene is on screen.
struct Preloader {
    pipelines: ScenePipelines,
    preset: ScenePreset,
    camera: SceneCamera,
    rig: CameraRig,
    timeline: CollapseTimeline,
    watchdog: PerformanceWatchdog,
    governor: QualityGovernor,
    elapsed: f32,
}

/// Live state for the portfolio proper.
struct Portfolio {
    orbit: OrbitSystem,
    choreographer: Choreographer,
    nodes: NodePipeline,
    last_frame: Option<OrbitFrame>,
    scroll_y: f32,
}

/// Main application state
struct App {
    config: AppConfig,
    registry: StackRegistry,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    preloader: Option<Preloader>,
    portfolio: Option<Portfolio>,
    clock: FrameClock,
    cursor: [f32; 2],
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let catalog = Catalog::load(&config.content.catalog_path)
            .unwrap_or_else(|e| panic!("Failed to load catalog: {}", e));
        let registry = catalog.build_registry();

        log::info!(
            "catalog loaded: {} stack nodes across rings {:?}",
            registry.len(),
            registry.ring_lens()
        );

        Self {
            config,
            registry,
            window: None,
            render_context: None,
            preloader: None,
            portfolio: None,
            clock: FrameClock::new(),
            cursor: [0.0, 0.0],
        }
    }

    fn logical_size(&self) -> (f32, f32) {
        let (w, h, scale) = match &self.window {
            Some(window) => {
                let size = window.inner_size();
                (size.width as f32, size.height as f32, window.scale_factor() as f32)
            }
            None => (
                self.config.window.width as f32,
                self.config.window.height as f32,
                1.0,
            ),
        };
        (w / scale, h / scale)
    }

    /// Sample the device signals once and pick the starting tier.
    fn device_profile(&self) -> DeviceProfile {
        let (width, _) = self.logical_size();
        let pixel_ratio = self
            .window
            .as_ref()
            .map(|w| w.scale_factor() as f32)
            .unwrap_or(1.0);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(4);

        DeviceProfile {
            coarse_pointer: self.config.preloader.coarse_pointer,
            viewport_width: width,
            memory_gb: self.config.preloader.memory_gb,
            logical_cores: cores,
            pixel_ratio,
        }
    }

    fn start_preloader(&mut self) {
        let ctx = match &self.render_context {
            Some(ctx) => ctx,
            None => return,
        };

        let profile = self.device_profile();
        let tier = match self.config.preloader.forced_tier() {
            Some(forced) => {
                log::info!("quality tier forced to {:?}", forced);
                forced
            }
            None => pick_tier(&profile),
        };
        log::info!("starting preloader at {:?} tier ({:?})", tier, profile);

        let preset = ScenePreset::for_tier(tier);
        let pipelines = ScenePipelines::new(
            &ctx.device,
            ctx.config.format,
            &preset,
            self.config.preloader.seed,
            ctx.config.width,
            ctx.config.height,
            profile.pixel_ratio,
        );

        let interactive = !profile.coarse_pointer && tier != folio_scene::QualityTier::Low;
        let phone_viewport = profile.viewport_width <= 640.0;

        self.preloader = Some(Preloader {
            pipelines,
            preset,
            camera: SceneCamera::default(),
            rig: CameraRig::new(interactive),
            timeline: CollapseTimeline::new(phone_viewport),
            watchdog: PerformanceWatchdog::new(),
            governor: QualityGovernor::new(tier),
            elapsed: 0.0,
        });
    }

    /// Swap the preloader for the portfolio view.
    fn enter_portfolio(&mut self) {
        let ctx = match &self.render_context {
            Some(ctx) => ctx,
            None => return,
        };

        let (width, _) = self.logical_size();
        let view_mode = ViewMode::from_width(width);
        let reduced_motion = self.config.accessibility.reduced_motion;

        let mut orbit = OrbitSystem::new(self.registry.ring_lens(), view_mode, reduced_motion);

        let multiplier = self.config.orbit.speed_multiplier;
        if (multiplier - 1.0).abs() > f32::EPSILON {
            for ring in RingId::ALL {
                let mut motion = RingMotion::preset(ring);
                motion.period_secs /= multiplier.max(0.01);
                orbit = orbit.with_motion(ring, motion);
            }
        }

        let mut choreographer = Choreographer::new(reduced_motion);
        for (name, top) in SECTIONS {
            let targets = match name {
                "skills" => self.registry.len(),
                _ => 4,
            };
            choreographer.register(RevealBatch::new(name, RevealTrigger::new(top), targets));
        }

        log::info!(
            "entering portfolio: {:?} view, {} reveal sections, {} orbit callbacks",
            view_mode,
            choreographer.registered(),
            orbit.scheduled_callbacks()
        );

        self.portfolio = Some(Portfolio {
            orbit,
            choreographer,
            nodes: NodePipeline::new(&ctx.device, ctx.config.format),
            last_frame: None,
            scroll_y: 0.0,
        });
        self.preloader = None;
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        if self.config.debug.show_timings {
            log::debug!("frame dt {:.2} ms", dt * 1000.0);
        }

        if self.preloader.is_some() {
            self.step_preloader(dt);
            if self
                .preloader
                .as_ref()
                .map(|p| p.timeline.finished(p.elapsed))
                .unwrap_or(false)
            {
                self.enter_portfolio();
            }
        }

        if self.preloader.is_none() && self.portfolio.is_some() {
            self.step_portfolio(dt);
        }

        self.present(event_loop);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn step_preloader(&mut self, dt: f32) {
        let ctx = match &self.render_context {
            Some(ctx) => ctx,
            None => return,
        };
        let seed = self.config.preloader.seed;
        let pre = match &mut self.preloader {
            Some(pre) => pre,
            None => return,
        };

        pre.elapsed += dt;
        pre.governor.tick(dt);
        pre.rig.update(dt);

        if let Some(WatchdogVerdict::Dip { fps }) = pre.watchdog.sample(pre.governor.tier(), dt) {
            if let Some(new_tier) = pre.governor.report_dip() {
                log::warn!("{:.1} fps sustained: downgrading to {:?}", fps, new_tier);
                pre.preset = ScenePreset::for_tier(new_tier);
                pre.pipelines.rebuild(&ctx.device, &pre.preset, seed);
            }
        }

        let t = pre.elapsed;
        let mut uniforms = SceneUniforms::new();
        uniforms.view = pre.camera.view_matrix(&pre.rig);
        uniforms.proj = pre.camera.projection_matrix(ctx.aspect_ratio());
        uniforms.eye_time = [pre.rig.eye[0], pre.rig.eye[1], pre.rig.eye[2], t];
        uniforms.phase = [
            pre.timeline.collapse(t),
            pre.timeline.zoom(t),
            pre.timeline.scene_alpha(t) * pre.timeline.fade_alpha(t),
            0.0,
        ];
        pre.pipelines.binding.update(&ctx.queue, &uniforms);
    }

    fn step_portfolio(&mut self, dt: f32) {
        let ctx = match &self.render_context {
            Some(ctx) => ctx,
            None => return,
        };
        let (width, height) = self.logical_size();
        let registry = &self.registry;
        let portfolio = match &mut self.portfolio {
            Some(p) => p,
            None => return,
        };

        let frame = portfolio.orbit.update(dt);

        let mut instances: Vec<NodeInstance> = frame
            .iter()
            .filter_map(|(node, visual)| {
                registry
                    .node_at(node.ring, node.index)
                    .map(|stack_node| node_instance(visual, accent_for(stack_node.category)))
            })
            .collect();
        // Raised nodes draw last so they sit on top.
        instances.sort_by(|a, b| a.z_layer.total_cmp(&b.z_layer));

        portfolio.nodes.set_viewport(&ctx.queue, width, height);
        portfolio.nodes.update(&ctx.queue, &instances);
        portfolio.last_frame = Some(frame);
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let ctx = match &self.render_context {
            Some(ctx) => ctx,
            None => return,
        };

        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                let size = ctx.size;
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(size);
                }
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        if let Some(pre) = &self.preloader {
            pre.pipelines.render(&mut encoder, &view);
        } else {
            // Portfolio background, then the orbit overlay.
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.015,
                            g: 0.016,
                            b: 0.03,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(portfolio) = &self.portfolio {
                portfolio.nodes.render(&mut encoder, &view);
            }
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::with_vsync(
                window.clone(),
                self.config.window.vsync,
            ))
            .expect("Failed to initialize GPU");

            self.window = Some(window);
            self.render_context = Some(render_context);

            if self.config.preloader.enabled && !self.config.accessibility.reduced_motion {
                self.start_preloader();
            } else {
                log::info!("preloader skipped");
                self.enter_portfolio();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }

                // The scene target tracks the surface at the preset's
                // resolution range.
                let dpr = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor() as f32)
                    .unwrap_or(1.0);
                if let (Some(ctx), Some(pre)) = (&self.render_context, &mut self.preloader) {
                    pre.pipelines.resize(
                        &ctx.device,
                        &pre.preset,
                        physical_size.width,
                        physical_size.height,
                        dpr,
                    );
                }

                // The orbit's presentation tier is fixed per mount; a resize
                // across a breakpoint rebuilds it.
                if let Some(portfolio) = &mut self.portfolio {
                    let scale = self
                        .window
                        .as_ref()
                        .map(|w| w.scale_factor() as f32)
                        .unwrap_or(1.0);
                    let new_mode = ViewMode::from_width(physical_size.width as f32 / scale);
                    if new_mode != portfolio.orbit.view_mode() {
                        log::info!("viewport crossed a breakpoint: {:?}", new_mode);
                        portfolio.orbit = OrbitSystem::new(
                            self.registry.ring_lens(),
                            new_mode,
                            self.config.accessibility.reduced_motion,
                        );
                        portfolio.last_frame = None;
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor() as f32)
                    .unwrap_or(1.0);
                self.cursor = [position.x as f32 / scale, position.y as f32 / scale];
                let (width, height) = self.logical_size();

                if let Some(pre) = &mut self.preloader {
                    pre.rig.set_pointer(
                        (self.cursor[0] / width) * 2.0 - 1.0,
                        (self.cursor[1] / height) * 2.0 - 1.0,
                    );
                } else if let Some(portfolio) = &mut self.portfolio {
                    let center = [width / 2.0, height / 2.0];
                    let hit = portfolio.last_frame.as_ref().and_then(|frame| {
                        pick_node(&portfolio.orbit, frame, self.cursor, center)
                    });
                    match hit {
                        Some(node) if portfolio.orbit.inspected() != Some(node) => {
                            portfolio.orbit.inspect(node);
                        }
                        None if portfolio.orbit.inspected().is_some() => {
                            portfolio.orbit.clear_inspection();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * SCROLL_LINE,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                let (_, height) = self.logical_size();
                if let Some(portfolio) = &mut self.portfolio {
                    portfolio.scroll_y = (portfolio.scroll_y - lines).max(0.0);
                    for play in portfolio
                        .choreographer
                        .on_scroll(portfolio.scroll_y, height)
                    {
                        log::debug!("section '{}' revealed", play.name);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting Folio");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
