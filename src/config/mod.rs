use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_cache_root, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the MLB Stats API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL of the stats service used for season aggregates.
    #[serde(default = "default_stats_base_url")]
    pub stats_base_url: String,
    /// Whether game feeds and lineups are cached on disk.
    #[serde(default)]
    pub cache_enabled: bool,
    /// Directory under which the `.milb` cache folder lives. Defaults to the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,
    /// Directory under which CSV batches are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Fixed pause after every network request, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_stats_base_url() -> String {
    constants::DEFAULT_STATS_BASE_URL.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_request_delay_ms() -> u64 {
    constants::DEFAULT_REQUEST_DELAY_MS
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            stats_base_url: default_stats_base_url(),
            cache_enabled: false,
            cache_dir: None,
            output_dir: default_output_dir(),
            request_delay_ms: default_request_delay_ms(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error: defaults are used instead.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MILB_API_BASE_URL` - Override the Stats API base URL
    /// - `MILB_STATS_BASE_URL` - Override the stats service base URL
    /// - `MILB_CACHE_ENABLED` - `true`/`false`, enable the on-disk cache
    /// - `MILB_CACHE_DIR` - Override the cache root directory
    /// - `MILB_OUTPUT_DIR` - Override the CSV output directory
    /// - `MILB_REQUEST_DELAY_MS` - Override the pause after each request
    /// - `MILB_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `MILB_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `MILB_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::STATS_BASE_URL) {
            self.stats_base_url = url;
        }

        if let Some(enabled) = std::env::var(env_vars::CACHE_ENABLED)
            .ok()
            .and_then(|s| s.trim().to_ascii_lowercase().parse::<bool>().ok())
        {
            self.cache_enabled = enabled;
        }

        if let Ok(cache_dir) = std::env::var(env_vars::CACHE_DIR) {
            self.cache_dir = Some(cache_dir);
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Some(delay) = std::env::var(env_vars::REQUEST_DELAY_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.request_delay_ms = delay;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Root directory of the document cache. The cache itself lives in
    /// `{cache_root}/.milb/`.
    pub fn cache_root(&self) -> PathBuf {
        match &self.cache_dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => get_default_cache_root(),
        }
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults and MILB_* environment variables)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", config.api_base_url);
        println!("Stats Service:");
        println!("{}", config.stats_base_url);
        println!("────────────────────────────────────");
        println!("Cache:");
        if config.cache_enabled {
            println!(
                "{}/.{}",
                config.cache_root().display(),
                constants::CACHE_NAMESPACE
            );
        } else {
            println!("disabled");
        }
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", config.output_dir);
        println!("────────────────────────────────────");
        println!("Request Delay / HTTP Timeout:");
        println!(
            "{} ms / {} seconds",
            config.request_delay_ms, config.http_timeout_seconds
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::DEFAULT_LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory
    /// if it doesn't exist.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_base_url = "https://statsapi.example.com/api"
cache_enabled = true
cache_dir = "/data"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, "https://statsapi.example.com/api");
        assert_eq!(config.stats_base_url, constants::DEFAULT_STATS_BASE_URL);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_root(), PathBuf::from("/data"));
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.request_delay_ms, constants::DEFAULT_REQUEST_DELAY_MS);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            cache_enabled: true,
            cache_dir: Some("/data/cache".to_string()),
            output_dir: "/data/out".to_string(),
            request_delay_ms: 250,
            ..Config::default()
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_config_without_optional_paths_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string(&config).unwrap();

        // Optional paths should not appear in TOML when None
        assert!(!toml_string.contains("cache_dir"));
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("api_base_url"));
    }

    #[test]
    fn test_cache_root_defaults_when_unset_or_empty() {
        let mut config = Config::default();
        assert_eq!(config.cache_root(), get_default_cache_root());

        config.cache_dir = Some(String::new());
        assert_eq!(config.cache_root(), get_default_cache_root());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::CACHE_ENABLED, "TRUE");
            std::env::set_var(env_vars::CACHE_DIR, "/tmp/milb-cache");
            std::env::set_var(env_vars::REQUEST_DELAY_MS, "0");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "not-a-number");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::CACHE_ENABLED);
            std::env::remove_var(env_vars::CACHE_DIR);
            std::env::remove_var(env_vars::REQUEST_DELAY_MS);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert!(config.cache_enabled);
        assert_eq!(config.cache_dir.as_deref(), Some("/tmp/milb-cache"));
        assert_eq!(config.request_delay_ms, 0);
        // Unparseable values leave the previous setting in place
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("milb_stats"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("milb_stats"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_base_url = [1, 2, \"unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }
}
