//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Orbital camera settings.
    pub camera: CameraConfig,
    /// Static scene layout settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
///
/// The viewer itself never opens a window; these values feed the projection
/// aspect ratio and are handed to whatever windowing layer embeds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Orbital camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Orbit angular speed in radians per second.
    pub orbit_speed: f32,
    /// Zoom speed in world units per second.
    pub zoom_speed: f32,
    /// Closest allowed camera distance from the origin.
    pub radius_min: f32,
    /// Farthest allowed camera distance from the origin.
    pub radius_max: f32,
    /// Camera distance from the origin at startup.
    pub start_radius: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

/// Static scene layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of model instances placed on the ring.
    pub instance_count: u32,
    /// Radius of the instance ring.
    pub ring_radius: f32,
    /// Height of each instance above the ground plane.
    pub instance_lift: f32,
    /// Half-extent of the square ground plane.
    pub ground_half_extent: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log full view/projection matrix rows during demos.
    pub dump_matrices: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "turntable".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_speed: 1.5,
            zoom_speed: 3.0,
            radius_min: 1.0,
            radius_max: 50.0,
            start_radius: 5.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            instance_count: 8,
            ring_radius: 3.75,
            instance_lift: 1.0,
            ground_half_extent: 5.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_matrices: false,
        }
    }
}

// --- Load / Save / Validate ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Check the numeric ranges the camera and scene builders rely on.
    ///
    /// The camera clamps its own state at runtime, but a nonsensical config
    /// should be rejected up front rather than silently corrected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid(
                "window",
                "width and height must be positive",
            ));
        }
        let cam = &self.camera;
        if cam.orbit_speed < 0.0 || cam.zoom_speed < 0.0 {
            return Err(ConfigError::invalid(
                "camera",
                "orbit_speed and zoom_speed must be non-negative",
            ));
        }
        if cam.radius_min <= 0.0 {
            return Err(ConfigError::invalid(
                "camera.radius_min",
                "must be strictly positive",
            ));
        }
        if cam.radius_max < cam.radius_min {
            return Err(ConfigError::invalid(
                "camera.radius_max",
                format!("must be at least radius_min ({})", cam.radius_min),
            ));
        }
        if cam.start_radius < cam.radius_min || cam.start_radius > cam.radius_max {
            return Err(ConfigError::invalid(
                "camera.start_radius",
                format!("must lie within [{}, {}]", cam.radius_min, cam.radius_max),
            ));
        }
        if cam.fov_y_degrees <= 0.0 || cam.fov_y_degrees >= 180.0 {
            return Err(ConfigError::invalid(
                "camera.fov_y_degrees",
                "must lie strictly between 0 and 180",
            ));
        }
        if cam.near <= 0.0 || cam.far <= cam.near {
            return Err(ConfigError::invalid(
                "camera",
                "near must be positive and far must exceed near",
            ));
        }
        let scene = &self.scene;
        if scene.instance_count == 0 {
            return Err(ConfigError::invalid(
                "scene.instance_count",
                "must be at least 1",
            ));
        }
        if scene.ring_radius <= 0.0 {
            return Err(ConfigError::invalid(
                "scene.ring_radius",
                "must be strictly positive",
            ));
        }
        if scene.ground_half_extent <= 0.0 {
            return Err(ConfigError::invalid(
                "scene.ground_half_extent",
                "must be strictly positive",
            ));
        }
        Ok(())
    }
}
