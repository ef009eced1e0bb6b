use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::time::{timeout, Instant};
use tracing::warn;

use super::api::{ChannelEvent, MediaChannel};
use super::frame::OutgoingFrame;
use crate::format::SampleFormat;

/// Key reported for Ctrl-C so an operator abort reads as a user interrupt
const INTERRUPT_KEY: char = '\u{3}';

/// Terminal channel adapter for smoke-testing generators
///
/// Frame payloads are written to stdout (pipe them into a player or a file),
/// the wait budget is slept out in real time, and Ctrl-C surfaces as a
/// keypress event so the session ends as interrupted and teardown still runs.
pub struct StdioChannel {
    format: SampleFormat,
    stdout: Stdout,
    pending: Option<ChannelEvent>,
}

impl StdioChannel {
    pub fn new(format: SampleFormat) -> Self {
        Self {
            format,
            stdout: tokio::io::stdout(),
            pending: None,
        }
    }
}

#[async_trait::async_trait]
impl MediaChannel for StdioChannel {
    async fn stop_playback(&mut self) -> Result<()> {
        // Nothing plays on stdout outside the relay
        Ok(())
    }

    fn write_format(&self) -> SampleFormat {
        self.format
    }

    async fn set_write_format(&mut self, format: SampleFormat) -> Result<()> {
        self.format = format;
        Ok(())
    }

    async fn wait_for_event(&mut self, budget_ms: i64) -> i64 {
        if self.pending.is_some() {
            return budget_ms.max(1);
        }

        let budget = Duration::from_millis(budget_ms.max(0) as u64);
        let start = Instant::now();

        match timeout(budget, tokio::signal::ctrl_c()).await {
            // Budget slept out without a signal
            Err(_) => 0,
            Ok(Ok(())) => {
                self.pending = Some(ChannelEvent::Keypress(INTERRUPT_KEY));
                let spent = start.elapsed().as_millis() as i64;
                (budget_ms - spent).max(1)
            }
            Ok(Err(e)) => {
                warn!("Ctrl-C handler unavailable: {}", e);
                tokio::time::sleep(budget.saturating_sub(start.elapsed())).await;
                0
            }
        }
    }

    async fn read_event(&mut self) -> Option<ChannelEvent> {
        // Only called after a positive wait, so an event is always queued
        self.pending.take()
    }

    async fn write_frame(&mut self, frame: &OutgoingFrame) -> Result<()> {
        self.stdout
            .write_all(&frame.payload)
            .await
            .context("Failed to write frame payload to stdout")?;
        self.stdout.flush().await.context("Failed to flush stdout")?;
        Ok(())
    }
}
