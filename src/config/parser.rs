use crate::error::{Error, Result};
use crate::session::SessionConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;

/// Default number of Actix Web workers when none is configured.
pub const DEFAULT_WORKERS: usize = 4;

/// HTTP bind configuration.
///
/// # Examples
///
/// ```
/// use mcp_sse_server::config::HttpConfig;
///
/// let http = HttpConfig::default();
/// assert_eq!(http.address, "127.0.0.1");
/// assert_eq!(http.port, 3000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Address to bind the listening socket to.
    #[serde(default = "default_address")]
    pub address: String,

    /// Port to bind the listening socket to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of Actix Web workers. Defaults to [`DEFAULT_WORKERS`] when absent.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Cadence configuration for streaming sessions.
///
/// The defaults match the reference deployment: one content frame per
/// second and a heartbeat comment every fifteen seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Interval between content frame emissions, in milliseconds.
    #[serde(rename = "eventIntervalMs", default = "default_event_interval_ms")]
    pub event_interval_ms: u64,

    /// Interval between keep-alive heartbeat frames, in milliseconds.
    /// Typically much larger than the event interval.
    #[serde(
        rename = "heartbeatIntervalMs",
        default = "default_heartbeat_interval_ms"
    )]
    pub heartbeat_interval_ms: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            event_interval_ms: default_event_interval_ms(),
            heartbeat_interval_ms: default_heartbeat_interval_ms(),
        }
    }
}

impl StreamConfig {
    /// Convert the millisecond cadences into a session configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            event_interval: Duration::from_millis(self.event_interval_ms),
            heartbeat_interval: Duration::from_millis(self.heartbeat_interval_ms),
        }
    }
}

fn default_event_interval_ms() -> u64 {
    1000
}

fn default_heartbeat_interval_ms() -> u64 {
    15000
}

/// Service self-description returned by the `metadata` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetadata {
    /// Human-readable service name.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Short description of what the service does.
    #[serde(default = "default_service_description")]
    pub description: String,

    /// Service version string.
    #[serde(default = "default_service_version")]
    pub version: String,

    /// Service author.
    #[serde(default = "default_service_author")]
    pub author: String,
}

impl Default for ServiceMetadata {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            description: default_service_description(),
            version: default_service_version(),
            author: default_service_author(),
        }
    }
}

impl ServiceMetadata {
    /// Build the metadata payload sent to clients, including the fixed
    /// capability flags of this server.
    pub fn describe(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "version": self.version,
            "author": self.author,
            "capabilities": {
                "search": true,
                "streaming": true
            }
        })
    }
}

fn default_service_name() -> String {
    "mcp-sse-server".to_string()
}

fn default_service_description() -> String {
    "MCP-style search endpoint with SSE streaming".to_string()
}

fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_service_author() -> String {
    env!("CARGO_PKG_AUTHORS").to_string()
}

/// Main configuration for the MCP SSE server.
///
/// # JSON Schema
///
/// The configuration follows this JSON schema, all sections optional:
///
/// ```json
/// {
///   "server": {
///     "address": "127.0.0.1",
///     "port": 3000,
///     "workers": 4
///   },
///   "stream": {
///     "eventIntervalMs": 1000,
///     "heartbeatIntervalMs": 15000
///   },
///   "metadata": {
///     "name": "arxiv-search",
///     "description": "Mock arXiv search over SSE",
///     "version": "1.0.0",
///     "author": "Example"
///   }
/// }
/// ```
///
/// # Examples
///
/// Loading a configuration from a string:
///
/// ```
/// use mcp_sse_server::config::Config;
///
/// let config = Config::parse_from_str(r#"{"server": {"port": 8080}}"#).unwrap();
/// assert_eq!(config.server.port, 8080);
/// assert_eq!(config.stream.event_interval_ms, 1000);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP bind settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Streaming cadence settings.
    #[serde(default)]
    pub stream: StreamConfig,

    /// Service metadata returned to clients.
    #[serde(default)]
    pub metadata: ServiceMetadata,
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// This method is instrumented with `tracing`.
    #[tracing::instrument(skip(path), fields(config_path = ?path.as_ref()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        tracing::debug!("Reading configuration file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigParse(format!("Failed to read config file: {}", e)))?;
        Self::parse_from_str(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn parse_from_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::ConfigParse(format!("Invalid config JSON: {}", e)))
    }
}
