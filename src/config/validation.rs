use crate::attendance::AliasResolver;
use crate::error::AppError;
use std::path::Path;

use super::Config;

/// Checks that an endpoint looks like an http(s) URL
fn validate_endpoint(name: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must be an http:// or https:// URL"
        )));
    }
    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Endpoints must be non-empty http(s) URLs
/// - Client credentials cannot be empty
/// - HTTP timeout must be positive
/// - Alias groups must be non-empty and disjoint
/// - Excluded names and the output path cannot be empty
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_endpoint("API endpoint", &config.api_endpoint)?;
    validate_endpoint("Token URL", &config.token_url)?;

    if config.client_id.trim().is_empty() {
        return Err(AppError::config_error("Client ID cannot be empty"));
    }
    if config.client_secret.trim().is_empty() {
        return Err(AppError::config_error("Client secret cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.exclude.iter().any(|name| name.is_empty()) {
        return Err(AppError::config_error("Excluded names cannot be empty"));
    }

    // Overlapping or empty groups are rejected here so a bad file fails at load time
    AliasResolver::new(config.aliases.clone())?;

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
