//! The window application: event routing and the per-frame driver.
//!
//! One frame of work per `RedrawRequested`: advance orbits unless paused,
//! ease the camera, pick under the cursor, render scene plus UI, request the
//! next redraw. Exiting the event loop is the teardown - no further frame is
//! scheduled once it returns.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::OrbitCamera;
use crate::error::AppError;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::orbit::SpeedConfig;
use crate::picking;
use crate::planet::PLANETS;
use crate::scene::Scene;
use crate::time::FrameClock;
use crate::ui;

/// Initial window size. The input NDC mapping is seeded from it and
/// corrected from the real surface size on resume and resize.
const WINDOW_SIZE: (u32, u32) = (1280, 720);

/// Open a window and run the visualization until it is closed.
pub fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,

    scene: Scene,
    speeds: SpeedConfig,
    paused: bool,

    camera: OrbitCamera,
    input: Input,
    clock: FrameClock,
    /// Planet index currently under the cursor, if any.
    hovered: Option<usize>,

    /// Setup failure carried out of the event loop.
    fatal: Option<AppError>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            scene: Scene::new(&PLANETS),
            speeds: SpeedConfig::from_descriptors(&PLANETS),
            paused: false,
            camera: OrbitCamera::new(),
            input: Input::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
            clock: FrameClock::new(),
            hovered: None,
            fatal: None,
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop, window: &Arc<Window>) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        self.clock.tick();
        let dt = self.clock.delta();

        if self.input.pause_toggled() {
            self.paused = !self.paused;
        }
        if self.input.dragging() {
            let delta = self.input.drag_delta();
            self.camera.rotate(delta.x, delta.y);
        }
        self.camera.zoom(self.input.scroll_delta());
        self.camera.update(dt);

        if !self.paused {
            self.scene.advance(&self.speeds);
        }

        let aspect = gpu.aspect();
        self.hovered = match self.input.cursor_ndc() {
            // No tooltip while the pointer sits on the control panel.
            Some(_) if gpu.ui().wants_pointer() => None,
            Some(ndc) => picking::pick(&self.scene.planets, &self.camera.screen_ray(ndc, aspect))
                .map(|hit| hit.planet),
            None => None,
        };

        let instances = self.scene.mesh_instances();
        let view_proj = self.camera.view_proj(aspect);
        let camera_pos = self.camera.position();

        let scene = &self.scene;
        let speeds = &mut self.speeds;
        let paused = &mut self.paused;
        let hovered = self.hovered;
        let cursor = self.input.cursor_position();
        let elapsed = self.clock.elapsed();
        let fps = self.clock.fps();

        let result = gpu.render(
            window,
            view_proj,
            camera_pos,
            scene.light_position,
            elapsed,
            &instances,
            |ctx| {
                ui::control_panel(ctx, &PLANETS, speeds, paused, fps);
                if let (Some(index), Some(cursor)) = (hovered, cursor) {
                    ui::planet_tooltip(ctx, scene.planets[index].descriptor.name, cursor);
                }
            },
        );

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                };
                gpu.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("dropped frame: {e:?}"),
        }

        self.input.begin_frame();
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Orrery - Solar System")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("window creation failed: {e}");
                self.fatal = Some(AppError::Window(e));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input.set_window_size(size.width, size.height);

        match pollster::block_on(GpuState::new(window.clone(), &self.scene)) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.window = Some(window.clone());
                window.request_redraw();
            }
            Err(e) => {
                log::error!("GPU setup failed: {e}");
                self.fatal = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Release the surface with the window; resumed() rebuilds both.
        log::info!("suspended, releasing GPU surface");
        self.gpu = None;
        self.window = None;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // The UI layer sees every event first; pointer events it consumes
        // must not drive the camera or picking.
        let consumed = self
            .gpu
            .as_mut()
            .map(|gpu| gpu.ui_mut().on_window_event(&window, &event))
            .unwrap_or(false);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.input.set_window_size(size.width, size.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop, &window);
            }
            event if !consumed => {
                self.input.handle_event(&event);
            }
            event => {
                self.input.handle_consumed_event(&event);
            }
        }
    }
}
