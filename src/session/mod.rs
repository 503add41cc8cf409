//! Streaming session management.
//!
//! This module implements the core lifecycle of one streaming response:
//! a [`StreamSession`] owns an event-emission timer that pulls protocol
//! frames from an [`EventSource`], an independent heartbeat timer that
//! emits keep-alive comments, and a disconnect signal from the transport.
//! All three are multiplexed cooperatively on a single task, so at most
//! one of them runs at a time per session and no lock guards the session
//! state.
//!
//! A session closes exactly once, whichever happens first:
//! - the source yields a message flagged `done` (terminal message),
//! - the source is exhausted (an empty source closes on the first tick),
//! - the transport signals disconnect,
//! - a frame write fails.
//!
//! All four paths converge on the same teardown routine: the state flips
//! from `Active` to `Closed`, both timers are cancelled, and the sink is
//! released. Nothing is ever written after `Closed`.
//!
//! # Components
//!
//! * `message` - Outbound protocol frames and their SSE wire encoding
//! * `sink` - The output seam ([`MessageSink`], [`ChannelSink`])
//! * `source` - The producer seam ([`EventSource`] and stock sources)

pub mod message;
pub mod sink;
pub mod source;

pub use message::{MessageKind, OutboundMessage, heartbeat_frame};
pub use sink::{ChannelSink, MessageSink};
pub use source::{EventSource, SequenceSource, TickerSource};

use crate::error::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use uuid::Uuid;

/// Timer cadences for one streaming session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Interval between content frame emissions.
    pub event_interval: Duration,
    /// Interval between keep-alive heartbeat frames. Independent of the
    /// event cadence and typically much larger.
    pub heartbeat_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            event_interval: Duration::from_millis(1000),
            heartbeat_interval: Duration::from_millis(15000),
        }
    }
}

/// Observable lifecycle state of a session.
///
/// The only transition is `Active` to `Closed`; a session never returns
/// to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Both timers are running.
    Active,
    /// The session has torn down; the connection is released.
    Closed,
}

/// Why a session left the `Active` state.
enum CloseReason {
    /// A message flagged `done = true` was emitted.
    Terminal,
    /// The event source ran out of messages.
    Exhausted,
    /// The transport signalled disconnect (or every handle was dropped).
    Disconnected,
    /// A frame write failed mid-stream.
    Failed(Error),
}

/// Handle for observing and closing a running session.
///
/// Cloneable; the transport layer holds one and triggers [`close`] when
/// the client goes away. Dropping the last handle also disconnects the
/// session, since nothing could ever close it afterwards.
///
/// [`close`]: SessionHandle::close
#[derive(Clone)]
pub struct SessionHandle {
    id: Uuid,
    disconnect_tx: watch::Sender<bool>,
    closed: Arc<AtomicBool>,
}

impl SessionHandle {
    /// Correlation id of the session, used in log fields.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.closed.load(Ordering::SeqCst) {
            SessionState::Closed
        } else {
            SessionState::Active
        }
    }

    /// Signal the session to close.
    ///
    /// Idempotent: calling this any number of times, from any number of
    /// clones, produces exactly one teardown. The driver observes the
    /// signal at its next loop iteration at the latest.
    pub fn close(&self) {
        // Send failure means the driver already finished its teardown.
        let _ = self.disconnect_tx.send(true);
    }
}

/// One streaming response session.
///
/// Created per accepted streaming connection via [`StreamSession::open`],
/// which spawns the driver task and returns immediately. The session
/// writes an optional acknowledgement frame, then interleaves content
/// frames (in source order) with heartbeat comments until it closes.
///
/// # Examples
///
/// ```no_run
/// use mcp_sse_server::session::{
///     ChannelSink, OutboundMessage, SequenceSource, SessionConfig, StreamSession,
/// };
///
/// # async fn demo() {
/// let (sink, mut frames) = ChannelSink::channel();
/// let source = SequenceSource::new(vec![OutboundMessage::generate("all done\n", true)]);
///
/// let handle = StreamSession::open(
///     Box::new(sink),
///     Box::new(source),
///     Some(OutboundMessage::generate("starting...\n", false)),
///     SessionConfig::default(),
/// );
///
/// while let Some(frame) = frames.recv().await {
///     // forward the frame to the client
/// }
/// # let _ = handle;
/// # }
/// ```
pub struct StreamSession {
    id: Uuid,
    sink: Box<dyn MessageSink>,
    source: Box<dyn EventSource>,
    config: SessionConfig,
    closed: Arc<AtomicBool>,
    disconnect_rx: watch::Receiver<bool>,
}

impl StreamSession {
    /// Open a session over `sink`, driven by `source`.
    ///
    /// Writes `initial` (if any) as the first frame, then schedules the
    /// event-emission and heartbeat timers. Does not block the caller;
    /// the returned [`SessionHandle`] observes and closes the session.
    pub fn open(
        sink: Box<dyn MessageSink>,
        source: Box<dyn EventSource>,
        initial: Option<OutboundMessage>,
        config: SessionConfig,
    ) -> SessionHandle {
        let id = Uuid::new_v4();
        let (disconnect_tx, disconnect_rx) = watch::channel(false);
        let closed = Arc::new(AtomicBool::new(false));

        let session = Self {
            id,
            sink,
            source,
            config,
            closed: Arc::clone(&closed),
            disconnect_rx,
        };

        tokio::spawn(session.run(initial));

        SessionHandle {
            id,
            disconnect_tx,
            closed,
        }
    }

    async fn run(mut self, initial: Option<OutboundMessage>) {
        tracing::debug!(
            session_id = %self.id,
            event_interval_ms = self.config.event_interval.as_millis() as u64,
            heartbeat_interval_ms = self.config.heartbeat_interval.as_millis() as u64,
            "Streaming session opened"
        );
        let reason = self.drive(initial).await;
        self.teardown(reason).await;
    }

    /// The session driver: one cooperative loop multiplexing the event
    /// timer, the heartbeat timer, and the disconnect signal.
    async fn drive(&mut self, initial: Option<OutboundMessage>) -> CloseReason {
        let Self {
            sink,
            source,
            config,
            disconnect_rx,
            ..
        } = self;

        if let Some(message) = initial {
            let done = message.done;
            if let Err(e) = write_message(sink.as_mut(), &message).await {
                return CloseReason::Failed(e);
            }
            if done {
                return CloseReason::Terminal;
            }
        }

        // First content frame lands one event interval after open, never
        // at the same instant as the initial frame.
        let mut events = time::interval_at(
            time::Instant::now() + config.event_interval,
            config.event_interval,
        );
        events.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut heartbeats = time::interval_at(
            time::Instant::now() + config.heartbeat_interval,
            config.heartbeat_interval,
        );
        heartbeats.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Disconnect wins any tie with a pending tick; no frame is
                // written once the signal has fired.
                biased;

                _ = disconnect_rx.changed() => {
                    return CloseReason::Disconnected;
                }
                _ = events.tick() => {
                    match source.next_message().await {
                        Some(message) => {
                            let done = message.done;
                            if let Err(e) = write_message(sink.as_mut(), &message).await {
                                return CloseReason::Failed(e);
                            }
                            if done {
                                return CloseReason::Terminal;
                            }
                        }
                        None => return CloseReason::Exhausted,
                    }
                }
                _ = heartbeats.tick() => {
                    if let Err(e) = sink.write_frame(message::heartbeat_frame()).await {
                        return CloseReason::Failed(e);
                    }
                }
            }
        }
    }

    /// The single teardown routine every close path converges on.
    async fn teardown(&mut self, reason: CloseReason) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        match &reason {
            CloseReason::Terminal => {
                tracing::debug!(session_id = %self.id, "Session closed after terminal message");
            }
            CloseReason::Exhausted => {
                tracing::debug!(session_id = %self.id, "Session closed on exhausted event source");
            }
            CloseReason::Disconnected => {
                tracing::debug!(session_id = %self.id, "Session closed on client disconnect");
            }
            CloseReason::Failed(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "Session closed on write failure");
            }
        }

        self.sink.release().await;
    }
}

async fn write_message(sink: &mut dyn MessageSink, message: &OutboundMessage) -> Result<()> {
    let frame = message.to_frame()?;
    sink.write_frame(frame).await
}
