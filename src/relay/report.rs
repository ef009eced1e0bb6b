use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::FailureKind;

/// Terminal status of a relay session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayOutcome {
    /// The generator closed its output and every frame was delivered
    Completed,
    /// A user keypress ended playback early; not an error
    Interrupted,
    /// The session was aborted; `SessionReport::failure` says why
    Failed,
}

/// What a finished relay session reports back to its caller
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session_id: String,

    pub outcome: RelayOutcome,

    /// Which error kind ended a failed session; `None` otherwise
    pub failure: Option<FailureKind>,

    /// Frames actually delivered to the channel
    pub frames_emitted: u64,

    /// Total playback time delivered, in milliseconds
    pub audio_ms_emitted: u64,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the session in seconds
    pub duration_secs: f64,
}
