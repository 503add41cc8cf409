#![cfg(test)]

use mcp_sse_server::session::message::{MessageKind, OutboundMessage, heartbeat_frame};
use serde_json::{Value, json};

fn frame_json(message: &OutboundMessage) -> Value {
    let frame = message.to_frame().expect("frame should serialize");
    let text = std::str::from_utf8(&frame).unwrap();

    assert!(text.starts_with("data: "), "content frames carry a data prefix");
    assert!(text.ends_with("\n\n"), "frames end with a blank line");

    serde_json::from_str(&text["data: ".len()..text.len() - 2]).unwrap()
}

#[test]
fn test_generate_frame_encoding() {
    let message = OutboundMessage::generate("Processing...\n", false);
    assert_eq!(message.kind, MessageKind::GenerateResponse);

    let json = frame_json(&message);
    assert_eq!(json["type"], "generate_response");
    assert_eq!(json["response"], "Processing...\n");
    assert_eq!(json["done"], false);
}

#[test]
fn test_terminal_generate_frame() {
    let json = frame_json(&OutboundMessage::generate("last\n", true));
    assert_eq!(json["done"], true);
}

#[test]
fn test_metadata_frame_encoding() {
    let metadata = json!({
        "name": "test-service",
        "capabilities": { "search": true, "streaming": true }
    });
    let message = OutboundMessage::metadata(metadata);

    let json = frame_json(&message);
    assert_eq!(json["type"], "metadata_response");
    assert_eq!(json["metadata"]["name"], "test-service");
    assert_eq!(json["metadata"]["capabilities"]["streaming"], true);
    assert_eq!(json["done"], true);
}

#[test]
fn test_error_frame_encoding() {
    let json = frame_json(&OutboundMessage::error("something failed"));
    assert_eq!(json["type"], "error");
    assert_eq!(json["error"], "something failed");
}

#[test]
fn test_tick_frame_encoding() {
    let json = frame_json(&OutboundMessage::tick(7));
    assert_eq!(json["type"], "tick");
    assert_eq!(json["count"], 7);
    assert!(json["time"].is_u64(), "ticks carry a Unix timestamp");
    assert_eq!(json["done"], false);
}

#[test]
fn test_non_object_payload_is_wrapped() {
    let message = OutboundMessage::new(MessageKind::Error, json!("bare string"), true);
    let json = frame_json(&message);
    assert_eq!(json["payload"], "bare string");
}

#[test]
fn test_heartbeat_frame_is_comment_only() {
    let frame = heartbeat_frame();
    assert_eq!(&frame[..], b": heartbeat\n\n");
    assert!(
        !frame.starts_with(b"data:"),
        "heartbeats must not look like content frames"
    );
}
