//! Request types for the MCP endpoint.
//!
//! The inbound contract is a small JSON convention: a required `type`
//! field naming the operation, plus operation-specific fields. Field
//! presence is checked here, at the boundary, so a malformed request is
//! rejected before any streaming session is opened.

use crate::error::{Error, Result};
use serde::Deserialize;

/// A parsed MCP request body.
#[derive(Debug, Clone, Deserialize)]
pub struct McpRequest {
    /// The operation name (`metadata` or `generate`).
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Free-text input for the `generate` operation.
    #[serde(default)]
    pub input: Option<String>,
}

impl McpRequest {
    /// Parse a request from raw body bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| Error::InvalidRequest(format!("Body is not valid JSON: {}", e)))
    }

    /// The operation name, or an `InvalidRequest` error if absent.
    pub fn kind(&self) -> Result<&str> {
        self.kind
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .ok_or_else(|| Error::InvalidRequest("Missing required field 'type'".to_string()))
    }

    /// The generate input, or an `InvalidRequest` error if absent.
    pub fn input(&self) -> Result<&str> {
        self.input
            .as_deref()
            .ok_or_else(|| Error::InvalidRequest("Missing required field 'input'".to_string()))
    }
}
