//! Configuration module for the MCP SSE server.
//!
//! This module handles parsing, validation, and access to configuration
//! settings for the HTTP server and its streaming sessions. Configurations
//! are loaded from files or strings in JSON format; every section has
//! defaults matching the reference deployment, so an empty object is a
//! valid configuration.
//!
//! # Examples
//!
//! Loading a configuration from a file:
//!
//! ```no_run
//! use mcp_sse_server::config::Config;
//!
//! let config = Config::from_file("config.json").unwrap();
//! println!("Binding on {}:{}", config.server.address, config.server.port);
//! ```
//!
//! Creating a configuration programmatically:
//!
//! ```
//! use mcp_sse_server::config::{Config, StreamConfig};
//!
//! let config = Config {
//!     stream: StreamConfig {
//!         event_interval_ms: 500,
//!         heartbeat_interval_ms: 10_000,
//!     },
//!     ..Config::default()
//! };
//! assert_eq!(config.stream.event_interval_ms, 500);
//! ```
mod parser;
pub mod validator;

pub use parser::{Config, DEFAULT_WORKERS, HttpConfig, ServiceMetadata, StreamConfig};
pub use validator::validate_config;
