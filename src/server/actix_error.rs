//! Actix Web error adapters for MCP SSE server errors.
//!
//! This module implements the Actix Web error traits for the crate's
//! error type, so handlers can return `Result<HttpResponse>` and have
//! boundary failures rendered as the structured error JSON the protocol
//! requires: `{"type":"error","error":<message>}`.

use crate::error::Error;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::UnsupportedRequestType(_) => StatusCode::BAD_REQUEST,
            Error::ConfigParse(_) => StatusCode::BAD_REQUEST,
            Error::ConfigValidation(_) => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(json!({
                "type": "error",
                "error": self.to_string()
            }))
    }
}
