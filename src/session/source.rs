//! Event sources for streaming sessions.
//!
//! An [`EventSource`] is a lazy, finite-or-infinite producer of
//! [`OutboundMessage`] frames. The session pulls one message per event
//! tick; `None` means the source is exhausted and the session closes.

use crate::session::message::OutboundMessage;
use async_trait::async_trait;
use std::collections::VecDeque;

/// A lazy producer of outbound protocol frames.
///
/// Finite sources mark their last message `done = true`; returning `None`
/// (exhaustion, including the empty-source case) also terminates the
/// session. Infinite sources simply never do either.
#[async_trait]
pub trait EventSource: Send {
    /// Pull the next message, or `None` if the source is exhausted.
    async fn next_message(&mut self) -> Option<OutboundMessage>;
}

/// A fixed ordered sequence of messages.
///
/// The mock producers in this crate are sequences prepared up front, with
/// the last element flagged terminal.
pub struct SequenceSource {
    messages: VecDeque<OutboundMessage>,
}

impl SequenceSource {
    /// Create a source that yields `messages` in order.
    pub fn new(messages: Vec<OutboundMessage>) -> Self {
        Self {
            messages: messages.into(),
        }
    }

    /// Number of messages remaining.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no messages remain.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[async_trait]
impl EventSource for SequenceSource {
    async fn next_message(&mut self) -> Option<OutboundMessage> {
        self.messages.pop_front()
    }
}

/// An infinite source of counted tick frames.
///
/// Never yields a terminal message; sessions over a ticker end only on
/// client disconnect.
pub struct TickerSource {
    count: u64,
}

impl TickerSource {
    /// Create a ticker starting at count zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a ticker whose first message carries `count`.
    ///
    /// Used when an initial tick has already been written as the session's
    /// acknowledgement frame.
    pub fn starting_at(count: u64) -> Self {
        Self { count }
    }
}

impl Default for TickerSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSource for TickerSource {
    async fn next_message(&mut self) -> Option<OutboundMessage> {
        let message = OutboundMessage::tick(self.count);
        self.count += 1;
        Some(message)
    }
}
