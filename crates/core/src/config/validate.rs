use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Storage path is not empty
/// - Website page title is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.storage.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.path cannot be empty".to_string(),
        ));
    }

    if config.website.title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "website.title cannot be empty".to_string(),
        ));
    }

    Ok(())
}
