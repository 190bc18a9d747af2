//! Command-line argument parsing for the turntable viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Turntable viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "turntable", about = "Orbital camera viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Orbit speed in radians per second.
    #[arg(long)]
    pub orbit_speed: Option<f32>,

    /// Zoom speed in world units per second.
    #[arg(long)]
    pub zoom_speed: Option<f32>,

    /// Starting camera distance from the origin.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Number of model instances on the ring.
    #[arg(long)]
    pub instances: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fov) = args.fov {
            self.camera.fov_y_degrees = fov;
        }
        if let Some(speed) = args.orbit_speed {
            self.camera.orbit_speed = speed;
        }
        if let Some(speed) = args.zoom_speed {
            self.camera.zoom_speed = speed;
        }
        if let Some(radius) = args.radius {
            self.camera.start_radius = radius;
        }
        if let Some(count) = args.instances {
            self.scene.instance_count = count;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            width: None,
            height: None,
            fov: None,
            orbit_speed: None,
            zoom_speed: None,
            radius: None,
            instances: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            radius: Some(8.0),
            log_level: Some("debug".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.camera.start_radius, 8.0);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 768);
        assert_eq!(config.camera.orbit_speed, 1.5);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_long_flags() {
        let args = CliArgs::parse_from(["turntable", "--orbit-speed", "2.5", "--instances", "12"]);
        assert_eq!(args.orbit_speed, Some(2.5));
        assert_eq!(args.instances, Some(12));
        assert_eq!(args.width, None);
    }
}
