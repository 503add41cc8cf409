#![cfg(test)]

use mcp_sse_server::config::{Config, validate_config};
use mcp_sse_server::error::{Error, Result};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_parse_empty_config_uses_defaults() -> Result<()> {
    let config = Config::parse_from_str("{}")?;

    assert_eq!(config.server.address, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.workers, None);
    assert_eq!(config.stream.event_interval_ms, 1000);
    assert_eq!(config.stream.heartbeat_interval_ms, 15000);
    assert_eq!(config.metadata.name, "mcp-sse-server");

    Ok(())
}

#[test]
fn test_parse_full_config() -> Result<()> {
    let config_str = r#"{
        "server": {
            "address": "0.0.0.0",
            "port": 8080,
            "workers": 2
        },
        "stream": {
            "eventIntervalMs": 250,
            "heartbeatIntervalMs": 5000
        },
        "metadata": {
            "name": "arxiv-search",
            "description": "Mock arXiv search over SSE",
            "version": "1.0.0",
            "author": "Example"
        }
    }"#;

    let config = Config::parse_from_str(config_str)?;

    assert_eq!(config.server.address, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.workers, Some(2));
    assert_eq!(config.stream.event_interval_ms, 250);
    assert_eq!(config.stream.heartbeat_interval_ms, 5000);
    assert_eq!(config.metadata.name, "arxiv-search");
    assert_eq!(config.metadata.author, "Example");

    Ok(())
}

#[test]
fn test_parse_invalid_json_fails() {
    let result = Config::parse_from_str("{not json");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn test_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"server": {{"port": 9090}}}}"#).expect("write config");

    let config = Config::from_file(file.path())?;
    assert_eq!(config.server.port, 9090);

    Ok(())
}

#[test]
fn test_from_missing_file_fails() {
    let result = Config::from_file("/nonexistent/config.json");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn test_validate_default_config() {
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn test_validate_rejects_zero_event_interval() {
    let mut config = Config::default();
    config.stream.event_interval_ms = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigValidation(_))
    ));
}

#[test]
fn test_validate_rejects_zero_heartbeat_interval() {
    let mut config = Config::default();
    config.stream.heartbeat_interval_ms = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigValidation(_))
    ));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigValidation(_))
    ));
}

#[test]
fn test_validate_rejects_zero_workers() {
    let mut config = Config::default();
    config.server.workers = Some(0);
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigValidation(_))
    ));
}

#[test]
fn test_validate_rejects_empty_metadata_name() {
    let mut config = Config::default();
    config.metadata.name = String::new();
    assert!(matches!(
        validate_config(&config),
        Err(Error::ConfigValidation(_))
    ));
}

#[test]
fn test_stream_config_converts_to_session_config() {
    let mut config = Config::default();
    config.stream.event_interval_ms = 250;
    config.stream.heartbeat_interval_ms = 5000;

    let session = config.stream.session_config();
    assert_eq!(session.event_interval, Duration::from_millis(250));
    assert_eq!(session.heartbeat_interval, Duration::from_millis(5000));
}

#[test]
fn test_metadata_describe_includes_capabilities() {
    let config = Config::default();
    let described = config.metadata.describe();

    assert_eq!(described["name"], "mcp-sse-server");
    assert_eq!(described["capabilities"]["search"], true);
    assert_eq!(described["capabilities"]["streaming"], true);
}
