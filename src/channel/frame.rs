use crate::format::SampleFormat;

/// Frame payload classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Audio payload
    Voice,
}

/// One timestamped unit of audio handed to the media channel
///
/// Built per loop iteration from the chunk just read and discarded after the
/// write; the relay never retains a frame across iterations.
#[derive(Debug, Clone)]
pub struct OutgoingFrame {
    pub kind: FrameKind,
    /// Encoding of `payload`
    pub format: SampleFormat,
    /// Raw sample bytes exactly as the generator produced them
    pub payload: Vec<u8>,
    /// Number of samples carried in `payload`
    pub sample_count: usize,
    /// Monotonic frame counter, starting at 0
    pub sequence: u64,
    /// Cumulative duration of all prior frames, in milliseconds
    pub timestamp_ms: u64,
    /// Playback duration of this frame, in milliseconds
    pub duration_ms: u64,
}
