use tracing::trace;

use super::error::RelayError;
use super::pacing::FrameTiming;
use crate::channel::{FrameKind, MediaChannel, OutgoingFrame};
use crate::format::FormatProfile;
use crate::generator::AudioChunk;

/// Build the outgoing voice frame for one chunk and deliver it
///
/// A write failure ends the session and is never retried.
pub async fn emit(
    channel: &mut dyn MediaChannel,
    chunk: AudioChunk,
    profile: &FormatProfile,
    timing: &FrameTiming,
) -> Result<(), RelayError> {
    let frame = OutgoingFrame {
        kind: FrameKind::Voice,
        format: profile.format,
        payload: chunk.bytes,
        sample_count: chunk.sample_count,
        sequence: timing.sequence,
        timestamp_ms: timing.timestamp_ms,
        duration_ms: timing.duration_ms,
    };

    trace!(
        "Writing frame {} ({} samples, {}ms)",
        frame.sequence,
        frame.sample_count,
        frame.duration_ms
    );

    channel
        .write_frame(&frame)
        .await
        .map_err(|e| RelayError::ChannelWrite {
            sequence: timing.sequence,
            reason: format!("{:#}", e),
        })
}
