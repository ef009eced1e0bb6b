use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

/// Read timeout and priming policy for relay sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// How long one pipe read may wait for data from a local source
    #[serde(default = "default_base_read_ms")]
    pub base_read_ms: u64,

    /// How long one pipe read may wait when the source is a networked
    /// locator (http, rtsp, ...)
    #[serde(default = "default_remote_read_ms")]
    pub remote_read_ms: u64,

    /// Wait before the first read so the generator can pre-buffer
    #[serde(default = "default_prime_delay_ms")]
    pub prime_delay_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            base_read_ms: default_base_read_ms(),
            remote_read_ms: default_remote_read_ms(),
            prime_delay_ms: default_prime_delay_ms(),
        }
    }
}

fn default_base_read_ms() -> u64 {
    2000
}

fn default_remote_read_ms() -> u64 {
    5000
}

fn default_prime_delay_ms() -> u64 {
    1000
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the
    /// file is absent
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
