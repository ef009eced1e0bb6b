use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::format::FormatProfile;

/// Raw sample bytes read from the generator in one pacing cycle
///
/// Transient: produced here, handed straight to the channel sink, never
/// retained across loop iterations.
#[derive(Debug, Clone)]
pub struct AudioChunk {
    pub bytes: Vec<u8>,
    pub sample_count: usize,
}

/// Result of one bounded read from the generator pipe
#[derive(Debug)]
pub enum ReadOutcome {
    /// Up to one frame's worth of samples arrived
    Chunk(AudioChunk),
    /// The generator closed its output; the stream ended normally
    Eof,
    /// Nothing arrived within the timeout; the source is presumed stalled
    TimedOut,
}

/// Read up to one frame's worth of bytes from the generator pipe, waiting at
/// most `timeout` for data to arrive
///
/// A read error means the pipe is gone and is folded into `Eof` after
/// logging; a timeout is not recoverable and ends the session as failed.
pub async fn read_chunk<R>(pipe: &mut R, profile: &FormatProfile, timeout: Duration) -> ReadOutcome
where
    R: AsyncRead + Unpin,
{
    let mut bytes = vec![0u8; profile.frame_bytes()];

    match tokio::time::timeout(timeout, pipe.read(&mut bytes)).await {
        Err(_) => {
            debug!("No data from generator within {}ms", timeout.as_millis());
            ReadOutcome::TimedOut
        }
        Ok(Ok(0)) => ReadOutcome::Eof,
        Ok(Ok(n)) => {
            bytes.truncate(n);
            ReadOutcome::Chunk(AudioChunk {
                bytes,
                sample_count: n / profile.bytes_per_sample,
            })
        }
        Ok(Err(e)) => {
            warn!("Read from generator failed: {}", e);
            ReadOutcome::Eof
        }
    }
}
