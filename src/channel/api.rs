use anyhow::Result;

use super::frame::OutgoingFrame;
use crate::format::SampleFormat;

/// Event read from the media channel while the relay is waiting out its
/// pacing budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    /// User pressed a key; aborts playback gracefully
    Keypress(char),
    /// Anything else (media, control, signalling); ignored by the relay
    Other,
}

/// Live bidirectional media channel the relay plays into
///
/// The relay only consumes this capability; format negotiation, frame
/// transport and event delivery are the channel implementation's business.
///
/// Hangup is signalled out of band rather than as an event: a negative
/// return from `wait_for_event` means the channel has been torn down.
#[async_trait::async_trait]
pub trait MediaChannel: Send {
    /// Stop any playback already in progress before the relay takes over
    async fn stop_playback(&mut self) -> Result<()>;

    /// The channel's current write format
    fn write_format(&self) -> SampleFormat;

    /// Switch the channel's write format
    async fn set_write_format(&mut self, format: SampleFormat) -> Result<()>;

    /// Block until an event is pending or `budget_ms` has elapsed
    ///
    /// Returns the unspent budget in milliseconds: positive means an event
    /// is ready to read, zero means the budget was consumed quietly, and
    /// negative means the channel is gone.
    async fn wait_for_event(&mut self, budget_ms: i64) -> i64;

    /// Read the pending event; `None` means the wake was spurious
    async fn read_event(&mut self) -> Option<ChannelEvent>;

    /// Deliver one timestamped frame to the channel
    async fn write_frame(&mut self, frame: &OutgoingFrame) -> Result<()>;
}
