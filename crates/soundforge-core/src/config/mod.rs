//! Configuration for SoundForge Studio
//!
//! - Generic YAML config loading/saving
//! - Config path utilities
//! - The studio's own settings tree (`StudioConfig`)
//!
//! # Usage
//!
//! ```ignore
//! use soundforge_core::config::{default_config_path, load_config, save_config, StudioConfig};
//!
//! let path = default_config_path("config.yaml");
//! let config: StudioConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;
mod studio;

pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path};
pub use studio::{
    EnvelopeStyle, KnobConfig, PianoRollConfig, SpectrogramConfig, StudioConfig,
    TransportConfig, WaveformConfig,
};
