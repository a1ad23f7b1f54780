use std::cell::Cell;

use scroll_guard_core::{wrap, ConfigError, DebounceError, RateLimiterConfig};

#[test]
fn test_negative_window_fails_fast() {
    let result = wrap(|| (), RateLimiterConfig::trailing(-1));
    assert_eq!(result.err(), Some(ConfigError::NegativeWindow { window_ms: -1 }));
}

#[test]
fn test_zero_window_is_valid() {
    assert!(wrap(|| (), RateLimiterConfig::leading(0)).is_ok());
}

#[test]
fn test_default_config() {
    let config = RateLimiterConfig::default();
    assert_eq!(config.window_ms, 10);
    assert!(config.fire_on_leading_edge);
}

#[test]
fn test_trailing_scenario() {
    let calls = Cell::new(Vec::new());
    let mut debounced = wrap(
        || {
            let mut seen = calls.take();
            seen.push("fired");
            calls.set(seen);
        },
        RateLimiterConfig::trailing(100),
    )
    .unwrap();

    for tick in [0, 30, 60] {
        assert_eq!(debounced.trigger_at(tick), Ok(None));
    }
    for tick in 61..160 {
        assert_eq!(debounced.advance_to(tick), Ok(None));
    }
    assert_eq!(debounced.advance_to(160), Ok(Some(())));
    assert_eq!(debounced.advance_to(1_000), Ok(None));

    drop(debounced);
    assert_eq!(calls.take().len(), 1);
}

#[test]
fn test_leading_scenario() {
    let calls = Cell::new(0);
    let mut debounced = wrap(|| calls.set(calls.get() + 1), RateLimiterConfig::leading(100)).unwrap();

    assert_eq!(debounced.trigger_at(0), Ok(Some(())));
    assert_eq!(calls.get(), 1);
    assert_eq!(debounced.trigger_at(50), Ok(None));
    assert_eq!(calls.get(), 1);
    assert_eq!(debounced.trigger_at(150), Ok(Some(())));
    assert_eq!(calls.get(), 2);

    // No trailing call after the cooldown
    assert_eq!(debounced.advance_to(10_000), Ok(None));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_action_output_is_returned() {
    let mut counter = 0;
    let mut debounced = wrap(
        move || {
            counter += 1;
            counter
        },
        RateLimiterConfig::leading(10),
    )
    .unwrap();

    assert_eq!(debounced.trigger_at(0), Ok(Some(1)));
    assert_eq!(debounced.trigger_at(10), Ok(Some(2)));
}

#[derive(Debug, PartialEq)]
struct ActionFailed;

#[test]
fn test_action_failure_propagates_to_caller() {
    let mut debounced = wrap(|| Err::<(), _>(ActionFailed), RateLimiterConfig::trailing(5)).unwrap();

    debounced.trigger_at(0).unwrap();
    let outcome = debounced.advance_to(5).unwrap();
    assert_eq!(outcome, Some(Err(ActionFailed)));

    // Failure is not retried
    assert_eq!(debounced.advance_to(50), Ok(None));
}

#[test]
#[should_panic(expected = "action panicked")]
fn test_action_panic_unwinds_through_trigger() {
    let mut debounced = wrap(|| panic!("action panicked"), RateLimiterConfig::leading(5)).unwrap();
    let _ = debounced.trigger_at(0);
}

#[test]
fn test_overdue_timer_runs_before_new_trigger() {
    let calls = Cell::new(0);
    let mut debounced = wrap(|| calls.set(calls.get() + 1), RateLimiterConfig::trailing(100)).unwrap();

    debounced.trigger_at(0).unwrap();
    // Host skipped ticks; the owed call runs as part of the next trigger
    assert_eq!(debounced.trigger_at(300), Ok(Some(())));
    assert_eq!(calls.get(), 1);
    assert_eq!(debounced.pending_deadline(), Some(400));
}

#[test]
fn test_cancel_discards_pending_call() {
    let calls = Cell::new(0);
    let mut debounced = wrap(|| calls.set(calls.get() + 1), RateLimiterConfig::trailing(100)).unwrap();

    debounced.trigger_at(0).unwrap();
    assert!(debounced.is_pending());
    debounced.cancel();
    assert!(!debounced.is_pending());

    assert_eq!(debounced.advance_to(500), Ok(None));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_expired_tick_is_reported() {
    let mut debounced = wrap(|| (), RateLimiterConfig::trailing(10)).unwrap();
    debounced.trigger_at(100).unwrap();

    assert_eq!(
        debounced.trigger_at(99),
        Err(DebounceError::ExpiredTick { min_acceptable_tick: 100 })
    );
}

#[test]
fn test_config_is_kept() {
    let debounced = wrap(|| (), RateLimiterConfig::trailing(42)).unwrap();
    assert_eq!(debounced.config(), RateLimiterConfig::trailing(42));
}
