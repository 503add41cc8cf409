/// Error handling module for the MCP SSE server.
///
/// This module defines the error types used throughout the library.
/// It covers configuration loading, request validation at the HTTP
/// boundary, and the failures that can terminate a streaming session.
///
/// # Example
///
/// ```
/// use mcp_sse_server::error::{Error, Result};
///
/// fn handle_error(result: Result<()>) {
///     match result {
///         Ok(_) => println!("Operation succeeded"),
///         Err(Error::InvalidRequest(msg)) => println!("Bad request: {}", msg),
///         Err(Error::StreamWrite(msg)) => println!("Stream write failed: {}", msg),
///         Err(e) => println!("Other error: {}", e),
///     }
/// }
/// ```
use thiserror::Error;

/// Errors that can occur in the mcp-sse-server library.
///
/// Boundary errors (`InvalidRequest`, `UnsupportedRequestType`,
/// `MethodNotAllowed`) are surfaced to the client as structured JSON
/// responses before a streaming session is ever opened. Session errors
/// (`StreamWrite`, `SessionClosed`) are fatal to their session only and
/// never propagate past its teardown.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to parse configuration from a file or string.
    ///
    /// This error occurs when:
    /// - The configuration JSON is malformed
    /// - Field types are incorrect
    /// - The configuration file cannot be read
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration is valid JSON but contains values that fail validation.
    ///
    /// This error occurs when:
    /// - An interval is zero
    /// - The bind port is zero
    /// - The service metadata name is empty
    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    /// The request body is malformed or missing a required field.
    ///
    /// This error occurs when:
    /// - The body is not valid JSON
    /// - The `type` field is missing
    /// - The `input` field is missing for a `generate` request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request named a kind this server does not implement.
    #[error("Unsupported request type: {0}")]
    UnsupportedRequestType(String),

    /// The HTTP method is not accepted on this route.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Writing a frame to the connection failed mid-stream.
    ///
    /// This error occurs when:
    /// - The client receiver has gone away
    /// - The transport rejects the write
    ///
    /// It is fatal to the session: both timers are cancelled and the
    /// connection is released. No partial-message recovery is attempted.
    #[error("Stream write failed: {0}")]
    StreamWrite(String),

    /// A write was attempted on a session that has already closed.
    ///
    /// Treated as a programming error for that session, never retried.
    #[error("Session is closed")]
    SessionClosed,

    /// Error in serializing or deserializing data.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other error not covered by the above categories.
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type for mcp-sse-server operations.
///
/// Convenience alias for `std::result::Result` with this module's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
