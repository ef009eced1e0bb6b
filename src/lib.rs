pub mod channel;
pub mod config;
pub mod format;
pub mod generator;
pub mod relay;

pub use channel::{ChannelEvent, FrameKind, MediaChannel, OutgoingFrame, StdioChannel};
pub use config::{Config, TimeoutConfig};
pub use format::{FormatProfile, SampleFormat};
pub use generator::{AudioChunk, GeneratorProcess, ReadOutcome};
pub use relay::{
    FailureKind, FrameTiming, PacingScheduler, RelayError, RelayOutcome, RelaySession,
    SessionConfig, SessionReport, WatchOutcome,
};
