//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tess4d_core::{HypercubeMesh, MeshError, Projection, RotationPlane, Vec4};
use tess4d_input::RotationController;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Tesseract shape and motion
    #[serde(default)]
    pub tesseract: TesseractConfig,
    /// Fixed viewpoint
    #[serde(default)]
    pub view: ViewConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // T4D_TESSERACT__PROJECTION=Orthographic -> tesseract.projection
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tess4D - Tesseract Viewer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Tesseract shape and motion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseractConfig {
    /// Half-extent along [x, y, z, w]
    pub half_extent: [f32; 4],
    /// Distance of the stereographic light along +W
    pub light_distance: f32,
    /// Initial projection (Stereographic or Orthographic)
    pub projection: Projection,
    /// Rotation speed in degrees per second
    pub angular_rate: f32,
    /// Plane rotating at startup (XY, ..., YZXW, None)
    pub initial_plane: RotationPlane,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            half_extent: [1.0; 4],
            light_distance: tess4d_core::DEFAULT_LIGHT_DISTANCE,
            projection: Projection::Stereographic,
            angular_rate: 30.0,
            initial_plane: RotationPlane::None,
        }
    }
}

impl TesseractConfig {
    /// Build the mesh these settings describe
    pub fn build_mesh(&self) -> Result<HypercubeMesh, MeshError> {
        let mesh = HypercubeMesh::with_light_distance(Vec4::from_array(self.half_extent), self.light_distance)?;
        Ok(mesh.with_projection(self.projection))
    }

    /// Build the rotation controller these settings describe
    pub fn controller(&self) -> RotationController {
        RotationController::new()
            .with_angular_rate(self.angular_rate)
            .with_plane(self.initial_plane)
    }
}

/// Fixed viewpoint looking at the origin down -Z
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance of the eye from the origin along +Z
    pub distance: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            distance: 6.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
