use crate::config::{Config, HttpConfig, StreamConfig};
use crate::error::{Error, Result};

/// Validates the HTTP bind configuration
pub fn validate_http_config(config: &HttpConfig) -> Result<()> {
    if config.address.is_empty() {
        return Err(Error::ConfigValidation(
            "Server address must not be empty".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(Error::ConfigValidation(
            "Server port must not be zero".to_string(),
        ));
    }

    if let Some(workers) = config.workers {
        if workers == 0 {
            return Err(Error::ConfigValidation(
                "Worker count must not be zero".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the streaming cadence configuration
///
/// A zero interval would make a timer fire continuously, so both
/// cadences must be strictly positive.
pub fn validate_stream_config(config: &StreamConfig) -> Result<()> {
    if config.event_interval_ms == 0 {
        return Err(Error::ConfigValidation(
            "Event interval must be greater than zero".to_string(),
        ));
    }

    if config.heartbeat_interval_ms == 0 {
        return Err(Error::ConfigValidation(
            "Heartbeat interval must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

/// Full configuration validation
pub fn validate_config(config: &Config) -> Result<()> {
    validate_http_config(&config.server)?;
    validate_stream_config(&config.stream)?;

    if config.metadata.name.is_empty() {
        return Err(Error::ConfigValidation(
            "Service metadata name must not be empty".to_string(),
        ));
    }

    Ok(())
}
