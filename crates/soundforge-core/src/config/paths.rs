//! Standard locations for SoundForge configuration files

use std::path::PathBuf;

/// Get the config directory
///
/// Returns: `~/.config/soundforge-studio` (platform equivalent elsewhere)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("soundforge-studio")
}

/// Get the path of a config file inside the config directory
pub fn default_config_path(filename: &str) -> PathBuf {
    default_config_dir().join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_name() {
        assert!(default_config_dir().ends_with("soundforge-studio"));
    }

    #[test]
    fn test_config_path_includes_filename() {
        let path = default_config_path("config.yaml");
        assert!(path.ends_with("soundforge-studio/config.yaml"));
    }
}
