use std::path::{Path, PathBuf};

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("milb_stats")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("milb_stats")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Default cache root: the user's home directory, or the current directory
/// when no home directory can be determined.
pub fn get_default_cache_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| Path::new(".").to_path_buf())
}
