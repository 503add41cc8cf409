//! Output sinks for streaming sessions.
//!
//! A [`MessageSink`] is the session's view of the connection: somewhere to
//! write wire frames and a way to release the connection on teardown. The
//! HTTP layer feeds frames to the client through a [`ChannelSink`]; tests
//! substitute their own implementations to observe session behavior.

use crate::error::{Error, Result};
use actix_web::web::Bytes;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// The output seam of a streaming session.
#[async_trait]
pub trait MessageSink: Send {
    /// Write one wire frame to the connection.
    ///
    /// A failure here is fatal to the session: the caller cancels its
    /// timers and releases the connection. No retries.
    async fn write_frame(&mut self, frame: Bytes) -> Result<()>;

    /// Release the underlying connection.
    ///
    /// Called exactly once by the session teardown routine. Writes after
    /// release fail with [`Error::SessionClosed`].
    async fn release(&mut self);
}

/// A sink backed by a bounded mpsc channel.
///
/// The receiving half feeds the HTTP streaming response body. When the
/// client goes away the receiver is dropped and the next write fails,
/// which the session treats as a fatal write error.
pub struct ChannelSink {
    tx: Option<mpsc::Sender<Bytes>>,
}

impl ChannelSink {
    /// Channel capacity for per-session frame buffering.
    const CAPACITY: usize = 32;

    /// Create a sink and the receiver that drains it.
    pub fn channel() -> (Self, mpsc::Receiver<Bytes>) {
        let (tx, rx) = mpsc::channel(Self::CAPACITY);
        (Self { tx: Some(tx) }, rx)
    }
}

#[async_trait]
impl MessageSink for ChannelSink {
    async fn write_frame(&mut self, frame: Bytes) -> Result<()> {
        let tx = self.tx.as_ref().ok_or(Error::SessionClosed)?;
        tx.send(frame)
            .await
            .map_err(|_| Error::StreamWrite("frame receiver dropped".to_string()))
    }

    async fn release(&mut self) {
        // Dropping the sender closes the channel, which ends the response
        // body stream on the HTTP side.
        self.tx = None;
    }
}
