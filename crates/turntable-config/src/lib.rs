//! Configuration system for the turntable viewer.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap and forward/backward compatible
//! serialization, with validation of the numeric ranges the camera and scene
//! builders rely on.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, SceneConfig, WindowConfig};
pub use error::ConfigError;
