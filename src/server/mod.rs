//! HTTP server layer for the MCP SSE server, built on Actix Web.
//!
//! This module provides the outward-facing surface of the crate: request
//! routing, CORS, the MCP request/response contract, and the adapters
//! that connect streaming sessions to HTTP response bodies.
//!
//! The layer is deliberately thin. It validates requests and maps errors
//! at the boundary; everything with a lifecycle lives in the
//! [`session`](crate::session) core, which this module only configures
//! and connects.
//!
//! # Components
//!
//! * `app` - Server construction, start, and graceful shutdown
//! * `handlers` - Actix Web handlers for `/mcp` and `/sse`
//! * `types` - Inbound request parsing and field validation
//! * `body` - Session-backed streaming response bodies
//! * `actix_error` - `ResponseError` mapping to structured error JSON

// Re-export the main types
pub use self::app::{SseServer, SseServerHandle};
pub use self::types::McpRequest;

// Submodules
pub mod actix_error;
pub mod app;
pub mod body;
pub mod handlers;
pub mod types;
