//! Streaming response bodies backed by a session's frame channel.
//!
//! The session writes wire frames into a channel sink; this module turns
//! the receiving half into an Actix streaming response body. When the
//! client disconnects, Actix drops the body stream, the guard inside it
//! fires the session's disconnect signal, and both session timers are
//! cancelled at the next loop iteration.

use crate::session::SessionHandle;
use actix_web::HttpResponse;
use actix_web::web::Bytes;
use tokio::sync::mpsc;

/// Signals session disconnect when the response body is dropped.
struct DisconnectGuard(SessionHandle);

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        tracing::debug!(session_id = %self.0.id(), "Response body dropped, signalling disconnect");
        self.0.close();
    }
}

/// Build the SSE streaming response for a running session.
///
/// Carries the event-stream headers required by the protocol, including
/// the proxy-buffering-disable marker. The body ends when the session
/// releases its sink; it disconnects the session if dropped first.
pub fn streaming_response(handle: SessionHandle, mut frames: mpsc::Receiver<Bytes>) -> HttpResponse {
    let guard = DisconnectGuard(handle);

    let stream = async_stream::stream! {
        let _guard = guard;
        while let Some(frame) = frames.recv().await {
            yield Ok::<_, actix_web::Error>(frame);
        }
    };

    HttpResponse::Ok()
        .append_header(("Content-Type", "text/event-stream"))
        .append_header(("Cache-Control", "no-cache"))
        .append_header(("Connection", "keep-alive"))
        .append_header(("X-Accel-Buffering", "no"))
        .streaming(stream)
}
