//! Tess4D - Tesseract Viewer
//!
//! Rotates a 4D hypercube and shows its 3D projection.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use tess4d::config::AppConfig;
use tess4d::input::{InputAction, InputMapper};
use tess4d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use tess4d_core::HypercubeMesh;
use tess4d_input::RotationController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    mesh: HypercubeMesh,
    controller: RotationController,
    simulation: SimulationSystem,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let mesh = config.tesseract.build_mesh().unwrap_or_else(|e| {
            log::warn!("Invalid tesseract settings: {}. Using the unit tesseract.", e);
            HypercubeMesh::default().with_projection(config.tesseract.projection)
        });
        let controller = config.tesseract.controller();

        Self {
            config,
            mesh,
            controller,
            simulation: SimulationSystem::new(),
            window: None,
            renderer: None,
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(self.controller.plane(), self.mesh.projection());
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::ToggleProjection => {
                self.mesh.toggle_projection();
                log::debug!("Projection: {:?}", self.mesh.projection());
                self.update_title();
            }
            InputAction::Reset => {
                self.mesh.reset();
                log::info!("Tesseract reset to its starting orientation");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Exit => event_loop.exit(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.simulation.update(&mut self.mesh, &self.controller);

        if let Some(renderer) = &mut self.renderer {
            if result.positions_dirty {
                renderer.update_positions(&self.mesh);
            }

            match renderer.render_frame(self.mesh.bounds()) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => log::debug!("Surface lost, reconfigured"),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let mut renderer = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.view.clone(),
            self.config.window.vsync,
        ) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };
        renderer.upload_mesh(&self.mesh);
        self.mesh.take_positions_dirty();

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.simulation.reset_clock();
        self.update_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    } else if self.controller.process_keyboard(key, event.state)
                        && event.state == ElementState::Pressed
                    {
                        let plane = self.controller.plane();
                        let kind = if plane.is_double() { "double" } else { "simple" };
                        log::debug!("Rotation plane: {} ({})", plane, kind);
                        self.update_title();
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    // Initialize logging, RUST_LOG overrides the configured level
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Tess4D");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
