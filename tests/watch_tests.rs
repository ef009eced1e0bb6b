// Tests for channel event classification during the pacing wait

mod common;

use common::{MockChannel, WaitScript};
use pipeplay::relay::wait_for_event;
use pipeplay::{ChannelEvent, SampleFormat, WatchOutcome};

#[tokio::test]
async fn test_quiescent_wait_consumes_budget() {
    let mut channel = MockChannel::with_script(SampleFormat::Alaw, vec![WaitScript::Sleep]);

    let outcome = wait_for_event(&mut channel, 10).await;
    assert_eq!(outcome, WatchOutcome::Continue { remaining_ms: 0 });
}

#[tokio::test]
async fn test_keypress_interrupts() {
    let mut channel = MockChannel::with_script(
        SampleFormat::Alaw,
        vec![WaitScript::Deliver(ChannelEvent::Keypress('1'))],
    );

    let outcome = wait_for_event(&mut channel, 100).await;
    assert_eq!(outcome, WatchOutcome::Interrupted);
}

#[tokio::test]
async fn test_negative_remainder_is_hangup() {
    let mut channel = MockChannel::with_script(SampleFormat::Alaw, vec![WaitScript::HangUp]);

    let outcome = wait_for_event(&mut channel, 100).await;
    assert_eq!(outcome, WatchOutcome::HungUp);
}

#[tokio::test]
async fn test_spurious_wake_carries_budget_forward() {
    let mut channel = MockChannel::with_script(SampleFormat::Alaw, vec![WaitScript::NullEvent]);

    match wait_for_event(&mut channel, 100).await {
        WatchOutcome::Continue { remaining_ms } => assert!(remaining_ms > 0),
        other => panic!("expected Continue, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unrelated_event_is_discarded_and_budget_carried() {
    let mut channel = MockChannel::with_script(
        SampleFormat::Alaw,
        vec![WaitScript::Deliver(ChannelEvent::Other)],
    );

    match wait_for_event(&mut channel, 100).await {
        WatchOutcome::Continue { remaining_ms } => assert!(remaining_ms > 0),
        other => panic!("expected Continue, got {:?}", other),
    }
}
