use tracing::{debug, trace};

use crate::channel::{ChannelEvent, MediaChannel};

/// What came of one bounded wait on the channel's event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Nothing that ends the session; `remaining_ms` of the budget is unspent
    Continue { remaining_ms: i64 },
    /// User keypress; playback should end gracefully
    Interrupted,
    /// The channel has been torn down
    HungUp,
}

/// Wait on the channel for at most `budget_ms` and classify what arrives
///
/// Events that are neither a keypress nor a hangup are read, discarded, and
/// the unspent budget carried forward into the caller's next wait-or-read
/// decision.
pub async fn wait_for_event(channel: &mut dyn MediaChannel, budget_ms: i64) -> WatchOutcome {
    let remaining_ms = channel.wait_for_event(budget_ms).await;

    if remaining_ms < 0 {
        debug!("Hangup detected");
        return WatchOutcome::HungUp;
    }

    if remaining_ms == 0 {
        // Quiescent wake, the budget was slept out
        return WatchOutcome::Continue { remaining_ms: 0 };
    }

    match channel.read_event().await {
        None => {
            // Spurious wake, nothing actually arrived
            WatchOutcome::Continue { remaining_ms }
        }
        Some(ChannelEvent::Keypress(key)) => {
            debug!("User pressed a key ({:?})", key);
            WatchOutcome::Interrupted
        }
        Some(event) => {
            trace!("Ignoring channel event: {:?}", event);
            WatchOutcome::Continue { remaining_ms }
        }
    }
}
