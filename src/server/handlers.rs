//! HTTP request handlers for the MCP SSE server.
//!
//! This module contains the Actix Web handlers for the server endpoints:
//! - `/mcp` for the MCP request/response contract (GET info, POST operations)
//! - `/sse` for the plain periodic-tick event stream
//!
//! Request validation happens here, before any session exists: malformed
//! bodies and unsupported operations are rejected with structured error
//! JSON and never reach the streaming core.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::search::{SearchEventSource, extract_query};
use crate::server::body::streaming_response;
use crate::server::types::McpRequest;
use crate::session::{ChannelSink, OutboundMessage, StreamSession, TickerSource};

use actix_web::{
    HttpRequest, HttpResponse,
    web::{Bytes, Data},
};
use serde_json::json;
use tracing;

/// Capability hint for GET requests on the MCP endpoint.
pub async fn mcp_info() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "MCP endpoint for SSE streaming integrations",
        "instructions": "Send a POST request with the 'type' field set to 'metadata' or 'generate'"
    }))
}

/// Main MCP endpoint handler.
///
/// Dispatches on the request `type`:
/// - `metadata` returns the service self-description as a single JSON
///   object, no streaming headers;
/// - `generate` opens a streaming session over the mock search source;
/// - anything else is a structured 400 error naming the unsupported type.
pub async fn mcp_post(config: Data<Config>, body: Bytes) -> Result<HttpResponse> {
    let request = McpRequest::from_slice(&body)?;
    let kind = request.kind()?;

    tracing::debug!(request_type = %kind, "Processing MCP request");

    match kind {
        "metadata" => {
            let message = OutboundMessage::metadata(config.metadata.describe());
            Ok(HttpResponse::Ok().json(message))
        }
        "generate" => {
            let input = request.input()?;
            let query = extract_query(input);
            Ok(open_generate_stream(query, &config))
        }
        other => Err(Error::UnsupportedRequestType(other.to_string())),
    }
}

/// Open a streaming session that emits the mock search results for `query`.
fn open_generate_stream(query: &str, config: &Config) -> HttpResponse {
    let (sink, frames) = ChannelSink::channel();
    let source = SearchEventSource::new(query);
    let initial = OutboundMessage::generate(format!("Searching for '{}' on arXiv...\n", query), false);

    let handle = StreamSession::open(
        Box::new(sink),
        Box::new(source),
        Some(initial),
        config.stream.session_config(),
    );

    tracing::debug!(session_id = %handle.id(), query = %query, "Opened generate streaming session");

    streaming_response(handle, frames)
}

/// Plain SSE endpoint: an infinite stream of counted tick frames.
///
/// The initial tick is written immediately; subsequent ticks follow the
/// configured event cadence until the client disconnects.
pub async fn sse_ticker(config: Data<Config>, req: HttpRequest) -> HttpResponse {
    tracing::debug!(peer = ?req.peer_addr(), "Client connected to tick stream");

    let (sink, frames) = ChannelSink::channel();
    let source = TickerSource::starting_at(1);
    let initial = OutboundMessage::tick(0);

    let handle = StreamSession::open(
        Box::new(sink),
        Box::new(source),
        Some(initial),
        config.stream.session_config(),
    );

    tracing::debug!(session_id = %handle.id(), "Opened ticker streaming session");

    streaming_response(handle, frames)
}

/// Fallback for HTTP methods the MCP endpoint does not accept.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse> {
    Err(Error::MethodNotAllowed(req.method().to_string()))
}
