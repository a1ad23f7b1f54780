use scroll_guard_core::debouncers::TrailingEdgeCore;
use scroll_guard_core::{DebounceError, TriggerCore, TriggerOutcome};

#[test]
fn test_trigger_schedules_deadline() {
    let core = TrailingEdgeCore::new(100);
    assert_eq!(core.trigger_at(0), Ok(TriggerOutcome::Scheduled { deadline: 100 }));
    assert_eq!(core.pending_deadline(), Some(100));
}

#[test]
fn test_burst_collapses_into_one_call() {
    let core = TrailingEdgeCore::new(100);

    // Triggers at 0, 30, 60 -> single call at 160
    core.trigger_at(0).unwrap();
    core.trigger_at(30).unwrap();
    core.trigger_at(60).unwrap();

    let due = (60..=400).filter(|tick| core.poll_at(*tick) == Ok(true)).collect::<Vec<_>>();
    assert_eq!(due, vec![160]);
}

#[test]
fn test_each_trigger_replaces_timer() {
    let core = TrailingEdgeCore::new(50);

    core.trigger_at(10).unwrap();
    assert_eq!(core.pending_deadline(), Some(60));
    core.trigger_at(40).unwrap();
    assert_eq!(core.pending_deadline(), Some(90));

    // The first deadline no longer exists
    assert_eq!(core.poll_at(60), Ok(false));
    assert_eq!(core.poll_at(90), Ok(true));
}

#[test]
fn test_no_trigger_no_call() {
    let core = TrailingEdgeCore::new(10);
    for tick in 0..100 {
        assert_eq!(core.poll_at(tick), Ok(false));
    }
}

#[test]
fn test_call_is_reported_once() {
    let core = TrailingEdgeCore::new(10);
    core.trigger_at(0).unwrap();

    assert_eq!(core.poll_at(500), Ok(true));
    assert_eq!(core.poll_at(500), Ok(false));
    assert!(!core.is_pending());
}

#[test]
fn test_elapsed_timer_survives_late_trigger() {
    let core = TrailingEdgeCore::new(100);
    core.trigger_at(0).unwrap();

    // Nobody polled at 100; a trigger at 250 must not swallow the owed call
    assert_eq!(core.trigger_at(250), Ok(TriggerOutcome::Scheduled { deadline: 350 }));
    assert_eq!(core.poll_at(250), Ok(true));
    assert_eq!(core.poll_at(349), Ok(false));
    assert_eq!(core.poll_at(350), Ok(true));
}

#[test]
fn test_zero_window_due_same_tick() {
    let core = TrailingEdgeCore::new(0);
    assert_eq!(core.trigger_at(20), Ok(TriggerOutcome::Scheduled { deadline: 20 }));
    assert_eq!(core.poll_at(20), Ok(true));
}

#[test]
fn test_cancel_drops_pending_call() {
    let core = TrailingEdgeCore::new(100);
    core.trigger_at(0).unwrap();
    core.cancel();

    assert_eq!(core.pending_deadline(), None);
    assert_eq!(core.poll_at(1_000), Ok(false));
}

#[test]
fn test_expired_tick() {
    let core = TrailingEdgeCore::new(100);
    core.trigger_at(30).unwrap();

    assert_eq!(
        core.trigger_at(29),
        Err(DebounceError::ExpiredTick { min_acceptable_tick: 30 })
    );
    // Rejected tick leaves the timer untouched
    assert_eq!(core.pending_deadline(), Some(130));
}
