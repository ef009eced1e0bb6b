use std::time::Instant;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::config::SessionConfig;
use super::error::RelayError;
use super::pacing::PacingScheduler;
use super::report::{RelayOutcome, SessionReport};
use super::watch::WatchOutcome;
use super::{sink, watch};
use crate::channel::MediaChannel;
use crate::format::SampleFormat;
use crate::generator::{self, GeneratorProcess, ReadOutcome};

/// How the session left its streaming phase
enum SessionEnd {
    Completed,
    Interrupted,
    Failed(RelayError),
}

/// A playback session relaying one generator's output into one channel
///
/// The session negotiates the channel onto its format, launches the
/// generator, and alternates between paced reads of the output pipe and
/// bounded waits on the channel's event source. Every exit path funnels
/// through the same teardown: the generator is killed and reaped if it was
/// spawned, and the channel's write format is restored if the session moved
/// it.
pub struct RelaySession {
    config: SessionConfig,
}

impl RelaySession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Run the session to completion and report how it went
    ///
    /// Errors never escape the session; they are folded into the report's
    /// outcome and logged where they fire.
    pub async fn run(self, channel: &mut dyn MediaChannel) -> SessionReport {
        let started_at = Utc::now();
        let started = Instant::now();
        let mut pacing = PacingScheduler::new(self.config.profile.samples_per_second);

        info!(
            "Starting relay session {}: {} {}",
            self.config.session_id,
            self.config.generator_path.display(),
            self.config.source
        );

        let end = self.drive(channel, &mut pacing).await;

        let (outcome, failure) = match end {
            SessionEnd::Completed => (RelayOutcome::Completed, None),
            SessionEnd::Interrupted => (RelayOutcome::Interrupted, None),
            SessionEnd::Failed(err) => {
                // A hangup is the far end leaving, not a fault in the relay
                if matches!(err, RelayError::Hangup) {
                    info!("Relay session {} ended by hangup", self.config.session_id);
                } else {
                    error!("Relay session {} failed: {}", self.config.session_id, err);
                }
                (RelayOutcome::Failed, Some(err.kind()))
            }
        };

        let report = SessionReport {
            session_id: self.config.session_id.clone(),
            outcome,
            failure,
            frames_emitted: pacing.frames_emitted(),
            audio_ms_emitted: pacing.audio_ms(),
            started_at,
            duration_secs: started.elapsed().as_secs_f64(),
        };

        info!(
            "Session {} finished ({:?}): {} frames, {}ms of audio in {:.1}s",
            report.session_id,
            report.outcome,
            report.frames_emitted,
            report.audio_ms_emitted,
            report.duration_secs
        );

        report
    }

    async fn drive(
        &self,
        channel: &mut dyn MediaChannel,
        pacing: &mut PacingScheduler,
    ) -> SessionEnd {
        if let Err(e) = channel.stop_playback().await {
            warn!("Failed to stop current playback: {}", e);
        }

        let saved_format = channel.write_format();

        let end = match self.open_stream(channel, saved_format).await {
            Ok(mut generator) => {
                let end = self.stream(channel, &mut generator, pacing).await;
                generator.terminate().await;
                end
            }
            Err(err) => SessionEnd::Failed(err),
        };

        self.restore_format(channel, saved_format).await;

        end
    }

    /// Negotiate the channel onto the session's format, then launch the
    /// generator; nothing is spawned if negotiation fails
    async fn open_stream(
        &self,
        channel: &mut dyn MediaChannel,
        saved_format: SampleFormat,
    ) -> Result<GeneratorProcess, RelayError> {
        let wanted = self.config.profile.format;

        if saved_format != wanted {
            channel
                .set_write_format(wanted)
                .await
                .map_err(|e| RelayError::Format {
                    format: wanted,
                    reason: format!("{:#}", e),
                })?;
        }

        GeneratorProcess::spawn(&self.config.generator_path, &self.config.source)
    }

    /// The streaming loop
    ///
    /// One bounded wait per iteration: on the pipe when the pacing budget is
    /// spent, on the channel's event source otherwise.
    async fn stream(
        &self,
        channel: &mut dyn MediaChannel,
        generator: &mut GeneratorProcess,
        pacing: &mut PacingScheduler,
    ) -> SessionEnd {
        let read_timeout = self.config.read_timeout();

        // Give the generator a moment to pre-buffer before the first read
        let mut budget_ms = self.config.timeouts.prime_delay_ms as i64;

        loop {
            if budget_ms <= 0 {
                match generator::read_chunk(generator.stdout(), &self.config.profile, read_timeout)
                    .await
                {
                    ReadOutcome::Chunk(chunk) => {
                        let timing = pacing.plan(chunk.sample_count);

                        if let Err(err) =
                            sink::emit(channel, chunk, &self.config.profile, &timing).await
                        {
                            return SessionEnd::Failed(err);
                        }

                        pacing.advance(&timing);
                        budget_ms = timing.wait_budget_ms as i64;
                    }
                    ReadOutcome::Eof => {
                        debug!("No more samples");
                        return SessionEnd::Completed;
                    }
                    ReadOutcome::TimedOut => {
                        return SessionEnd::Failed(RelayError::StreamTimeout {
                            waited_ms: read_timeout.as_millis() as u64,
                        });
                    }
                }
            } else {
                match watch::wait_for_event(channel, budget_ms).await {
                    WatchOutcome::Continue { remaining_ms } => budget_ms = remaining_ms,
                    WatchOutcome::Interrupted => return SessionEnd::Interrupted,
                    WatchOutcome::HungUp => return SessionEnd::Failed(RelayError::Hangup),
                }
            }
        }
    }

    /// Put the channel back into the format it had at session start, if the
    /// session moved it off that format
    async fn restore_format(&self, channel: &mut dyn MediaChannel, saved_format: SampleFormat) {
        if channel.write_format() == saved_format {
            return;
        }

        if let Err(e) = channel.set_write_format(saved_format).await {
            warn!("Failed to restore channel write format: {}", e);
        }
    }
}
