//! YAML configuration I/O
//!
//! Works with any serializable settings type; a missing or broken file
//! never stops the studio from starting.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: No config at {:?}, using defaults", path);
        return T::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("load_config: Failed to read {:?}: {}, using defaults", path, e);
            return T::default();
        }
    };

    serde_yaml::from_str::<T>(&contents).unwrap_or_else(|e| {
        log::warn!("load_config: Failed to parse {:?}: {}, using defaults", path, e);
        T::default()
    })
}

/// Save configuration to a YAML file, creating parent directories as needed
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::debug!("save_config: wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudioConfig;
    use crate::notes::SnapValue;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config: StudioConfig = load_config(Path::new("/nonexistent/soundforge/config.yaml"));
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = StudioConfig::default();
        config.piano_roll.lowest_pitch = 48;
        config.piano_roll.default_snap = SnapValue::Eighth;
        config.transport.loop_length_secs = 32.0;

        save_config(&config, &path).unwrap();
        let loaded: StudioConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "piano_roll: [not, a, map").unwrap();

        let config: StudioConfig = load_config(&path);
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "piano_roll:\n  highest_pitch: 84\n").unwrap();

        let config: StudioConfig = load_config(&path);
        assert_eq!(config.piano_roll.highest_pitch, 84);
        assert_eq!(config.piano_roll.lowest_pitch, 36);
        assert_eq!(config.knob, Default::default());
    }
}
