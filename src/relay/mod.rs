//! Relay session orchestration
//!
//! This module provides the `RelaySession` abstraction that manages:
//! - Launching the generator process and capturing its output pipe
//! - Paced, timestamped frame delivery into the media channel
//! - Interrupt and hangup watching between reads
//! - Unconditional teardown and the final session report

mod config;
mod error;
mod pacing;
mod report;
mod session;
mod sink;
mod watch;

pub use config::SessionConfig;
pub use error::{FailureKind, RelayError};
pub use pacing::{FrameTiming, PacingScheduler};
pub use report::{RelayOutcome, SessionReport};
pub use session::RelaySession;
pub use watch::{wait_for_event, WatchOutcome};
