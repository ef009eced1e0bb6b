use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::format::SampleFormat;

/// Everything that can end a relay session as failed
///
/// End of stream and a user interrupt are not errors and have no variant
/// here; they surface directly as session outcomes.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to launch generator {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("channel rejected write format {format:?}: {reason}")]
    Format {
        format: SampleFormat,
        reason: String,
    },

    #[error("no audio from generator within {waited_ms}ms")]
    StreamTimeout { waited_ms: u64 },

    #[error("failed to write frame {sequence} to channel: {reason}")]
    ChannelWrite { sequence: u64, reason: String },

    #[error("channel hung up")]
    Hangup,
}

/// Coarse failure classification carried in the session report
///
/// The full error is logged where it fires; callers only see which kind
/// ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Launch,
    Format,
    StreamTimeout,
    ChannelWrite,
    Hangup,
}

impl RelayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RelayError::Launch { .. } => FailureKind::Launch,
            RelayError::Format { .. } => FailureKind::Format,
            RelayError::StreamTimeout { .. } => FailureKind::StreamTimeout,
            RelayError::ChannelWrite { .. } => FailureKind::ChannelWrite,
            RelayError::Hangup => FailureKind::Hangup,
        }
    }
}
