// Scripted media channel for relay session tests
//
// The mock plays back a script of wait behaviors, records every frame and
// format change, and can be told to reject format switches or fail writes.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use pipeplay::{ChannelEvent, MediaChannel, OutgoingFrame, SampleFormat, TimeoutConfig};

/// Behavior of one `wait_for_event` call
#[derive(Debug, Clone, Copy)]
pub enum WaitScript {
    /// Sleep out the whole budget, report nothing
    Sleep,
    /// Report an event pending and hand it out on the next read
    Deliver(ChannelEvent),
    /// Report the channel as torn down (negative remainder)
    HangUp,
    /// Report an event pending but have `read_event` return `None`
    /// (a spurious wake)
    NullEvent,
}

pub struct MockChannel {
    format: SampleFormat,
    pub reject_set_format: bool,
    pub fail_writes: bool,
    pub script: VecDeque<WaitScript>,
    /// Every frame successfully written
    pub frames: Vec<OutgoingFrame>,
    /// Every accepted format switch, in order
    pub format_changes: Vec<SampleFormat>,
    pub stop_calls: usize,
    pending: Option<ChannelEvent>,
}

impl MockChannel {
    pub fn new(format: SampleFormat) -> Self {
        Self {
            format,
            reject_set_format: false,
            fail_writes: false,
            script: VecDeque::new(),
            frames: Vec::new(),
            format_changes: Vec::new(),
            stop_calls: 0,
            pending: None,
        }
    }

    pub fn with_script(format: SampleFormat, script: Vec<WaitScript>) -> Self {
        let mut channel = Self::new(format);
        channel.script = script.into();
        channel
    }

    pub fn current_format(&self) -> SampleFormat {
        self.format
    }
}

#[async_trait::async_trait]
impl MediaChannel for MockChannel {
    async fn stop_playback(&mut self) -> Result<()> {
        self.stop_calls += 1;
        Ok(())
    }

    fn write_format(&self) -> SampleFormat {
        self.format
    }

    async fn set_write_format(&mut self, format: SampleFormat) -> Result<()> {
        if self.reject_set_format {
            anyhow::bail!("channel cannot write {:?}", format);
        }
        self.format = format;
        self.format_changes.push(format);
        Ok(())
    }

    async fn wait_for_event(&mut self, budget_ms: i64) -> i64 {
        match self.script.pop_front().unwrap_or(WaitScript::Sleep) {
            WaitScript::Sleep => {
                tokio::time::sleep(Duration::from_millis(budget_ms.max(0) as u64)).await;
                0
            }
            WaitScript::Deliver(event) => {
                self.pending = Some(event);
                budget_ms.max(1)
            }
            WaitScript::HangUp => -1,
            WaitScript::NullEvent => {
                self.pending = None;
                budget_ms.max(1)
            }
        }
    }

    async fn read_event(&mut self) -> Option<ChannelEvent> {
        self.pending.take()
    }

    async fn write_frame(&mut self, frame: &OutgoingFrame) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("simulated channel write failure");
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Timeouts tightened so failure-path tests stay fast
pub fn fast_timeouts() -> TimeoutConfig {
    TimeoutConfig {
        base_read_ms: 300,
        remote_read_ms: 600,
        prime_delay_ms: 0,
    }
}
