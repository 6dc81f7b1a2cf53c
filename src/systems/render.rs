//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh pipeline and buffer uploads
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use tess4d_core::{Aabb3, HypercubeMesh};
use tess4d_render::{
    context::{ContextError, RenderContext},
    pipeline::{look_at_matrix, perspective_matrix, view_projection, MeshPipeline, MeshUniforms},
};

use crate::config::{RenderingConfig, ViewConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    render_config: RenderingConfig,
    view_config: ViewConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        view_config: ViewConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mesh_pipeline = MeshPipeline::new(
            &context.device,
            context.config.format,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            mesh_pipeline,
            render_config,
            view_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline
            .ensure_depth_texture(&self.context.device, self.context.config.width, self.context.config.height);
    }

    /// Upload every mesh buffer to the GPU
    pub fn upload_mesh(&mut self, mesh: &HypercubeMesh) {
        self.mesh_pipeline.upload_mesh(&self.context.device, mesh);
        log::info!(
            "Uploaded {} vertices and {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    /// Re-upload the projected positions
    pub fn update_positions(&mut self, mesh: &HypercubeMesh) {
        if !self.mesh_pipeline.update_positions(&self.context.queue, mesh.positions()) {
            self.upload_mesh(mesh);
        }
    }

    /// Render a single frame
    pub fn render_frame(&mut self, bounds: Aabb3) -> Result<(), RenderError> {
        let view_proj = self.view_projection(bounds);
        self.mesh_pipeline
            .update_uniforms(&self.context.queue, &MeshUniforms::new(view_proj));

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.mesh_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Camera on +Z looking at the shape's center, far enough back to see all of it
    fn view_projection(&self, bounds: Aabb3) -> [[f32; 4]; 4] {
        let fov = self.view_config.fov.to_radians();
        let target = bounds.center();
        let distance = fit_distance(self.view_config.distance, fov, bounds.radius());
        let eye = [target[0], target[1], target[2] + distance];

        let view = look_at_matrix(eye, target, [0.0, 1.0, 0.0]);
        let proj = perspective_matrix(
            fov,
            self.context.aspect_ratio(),
            self.view_config.near,
            self.view_config.far,
        );
        view_projection(view, proj)
    }
}

/// Eye distance that keeps a sphere of `radius` inside a cone of `fov` radians
///
/// Never closer than `preferred`.
fn fit_distance(preferred: f32, fov: f32, radius: f32) -> f32 {
    let half = (fov * 0.5).sin();
    if half <= 0.0 {
        return preferred;
    }
    preferred.max(radius / half)
}
