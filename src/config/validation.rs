use crate::config::types::{Config, FetchConfig, OutputConfig, SourceConfig, WindowConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_window_config(&config.window)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    if let Some(proxy) = &config.proxy {
        Url::parse(&proxy.url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid proxy url: {}", e)))?;
    }
    Ok(())
}

/// Validates the source section
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http(s), got '{}'",
            config.base_url
        )));
    }

    // Thread and listing hrefs are joined onto the base by string concatenation,
    // so a missing trailing slash would corrupt every URL.
    if !config.base_url.ends_with('/') {
        return Err(ConfigError::Validation(
            "base-url must end with '/'".to_string(),
        ));
    }

    if config.submitter.is_empty() {
        return Err(ConfigError::Validation(
            "submitter cannot be empty".to_string(),
        ));
    }

    if config.thread_marker.is_empty() {
        return Err(ConfigError::Validation(
            "thread-marker cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the recency window
fn validate_window_config(config: &WindowConfig) -> Result<(), ConfigError> {
    if config.years < 1 {
        return Err(ConfigError::Validation(format!(
            "window years must be >= 1, got {}",
            config.years
        )));
    }
    Ok(())
}

/// Validates fetch/retry knobs
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max-attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.records_path.is_empty() {
        return Err(ConfigError::Validation(
            "records-path cannot be empty".to_string(),
        ));
    }
    Ok(())
}
