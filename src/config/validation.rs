use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both base URLs must be non-empty and start with `http://` or `https://`
/// - Output directory cannot be empty
/// - HTTP timeout must be at least one second
/// - A custom cache directory must already exist when the cache is enabled
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_base_url("api_base_url", &config.api_base_url)?;
    validate_base_url("stats_base_url", &config.stats_base_url)?;

    if config.output_dir.is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if config.cache_enabled
        && let Some(cache_dir) = &config.cache_dir
        && !cache_dir.is_empty()
        && !Path::new(cache_dir).is_dir()
    {
        return Err(AppError::config_error(format!(
            "Cache directory '{cache_dir}' does not exist"
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_base_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https://"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let config = Config {
            api_base_url: "statsapi.mlb.com/api".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("api_base_url"));
    }

    #[test]
    fn test_rejects_empty_stats_url() {
        let config = Config {
            stats_base_url: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            validate_config(&config).unwrap_err(),
            AppError::Config(_)
        ));
    }

    #[test]
    fn test_rejects_missing_cache_dir_only_when_enabled() {
        let mut config = Config {
            cache_dir: Some("/definitely/not/a/real/milb/dir".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());

        config.cache_enabled = true;
        assert!(validate_config(&config).is_err());

        let temp_dir = tempdir().unwrap();
        config.cache_dir = Some(temp_dir.path().to_string_lossy().to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_creates_log_parent_directory() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("run.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
