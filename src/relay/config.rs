use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::TimeoutConfig;
use crate::format::FormatProfile;

/// Schemes that mark a source reference as a networked locator
const REMOTE_SCHEMES: &[&str] = &["http://", "https://", "rtsp://"];

/// Configuration for one relay session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier, used in logs and the final report
    pub session_id: String,

    /// Executable that writes raw samples to its stdout
    pub generator_path: PathBuf,

    /// Opaque source reference handed to the generator as its only argument
    pub source: String,

    /// Sample encoding the generator is expected to emit
    pub profile: FormatProfile,

    /// Read timeout and priming policy
    pub timeouts: TimeoutConfig,
}

impl SessionConfig {
    pub fn new(generator_path: PathBuf, source: String, profile: FormatProfile) -> Self {
        Self {
            session_id: format!("relay-{}", uuid::Uuid::new_v4()),
            generator_path,
            source,
            profile,
            timeouts: TimeoutConfig::default(),
        }
    }

    /// Read timeout for this session's source
    ///
    /// Remote locators get the longer bound to tolerate fetch latency.
    pub fn read_timeout(&self) -> Duration {
        if is_remote_source(&self.source) {
            Duration::from_millis(self.timeouts.remote_read_ms)
        } else {
            Duration::from_millis(self.timeouts.base_read_ms)
        }
    }
}

/// Case-insensitive match on known networked-transport scheme prefixes
fn is_remote_source(source: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| {
        source
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
