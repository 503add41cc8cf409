//! Protocol frames for streaming sessions.
//!
//! An [`OutboundMessage`] is a single protocol frame: a kind tag, a
//! kind-specific payload, and a `done` flag that is true only on the last
//! message of a generation sequence. Messages are immutable once
//! constructed and serialize to exactly one SSE wire frame.

use crate::error::{Error, Result};
use actix_web::web::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// The kind of an outbound protocol frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Capability description response.
    MetadataResponse,
    /// One chunk of a streamed generation sequence.
    GenerateResponse,
    /// Periodic counter frame from the plain event stream.
    Tick,
    /// Structured error frame.
    Error,
}

/// A single protocol frame produced by an event source.
///
/// Serializes to the wire JSON `{"type": ..., <payload fields>, "done": ...}`,
/// so a `GenerateResponse` carrying `{"response": "text"}` becomes
/// `{"type":"generate_response","response":"text","done":false}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Frame kind tag, serialized as the `type` field.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Kind-specific structured data, flattened into the frame object.
    #[serde(flatten)]
    pub payload: Map<String, Value>,

    /// True only on the last message of a generation sequence.
    pub done: bool,
}

impl OutboundMessage {
    /// Create a frame with an arbitrary payload object.
    ///
    /// Payload values that are not JSON objects are wrapped under a
    /// `"payload"` key so the frame always flattens cleanly.
    pub fn new(kind: MessageKind, payload: Value, done: bool) -> Self {
        let payload = match payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("payload".to_string(), other);
                map
            }
        };
        Self {
            kind,
            payload,
            done,
        }
    }

    /// Create a generation chunk carrying a `response` text field.
    pub fn generate(response: impl Into<String>, done: bool) -> Self {
        Self::new(
            MessageKind::GenerateResponse,
            json!({ "response": response.into() }),
            done,
        )
    }

    /// Create a metadata response carrying a `metadata` object.
    pub fn metadata(metadata: Value) -> Self {
        Self::new(MessageKind::MetadataResponse, json!({ "metadata": metadata }), true)
    }

    /// Create a tick frame carrying the counter value and a Unix timestamp.
    pub fn tick(count: u64) -> Self {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::new(MessageKind::Tick, json!({ "count": count, "time": time }), false)
    }

    /// Create a structured error frame.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, json!({ "error": message.into() }), true)
    }

    /// Encode this message as one SSE content frame: `data: <JSON>\n\n`.
    pub fn to_frame(&self) -> Result<Bytes> {
        let json = serde_json::to_string(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize frame: {}", e)))?;
        Ok(Bytes::from(format!("data: {}\n\n", json)))
    }
}

/// The comment-only keep-alive frame: `: heartbeat\n\n`.
///
/// Carries no payload and must be ignored by any conforming client parser.
pub fn heartbeat_frame() -> Bytes {
    Bytes::from_static(b": heartbeat\n\n")
}
