use std::sync::Mutex;
use tracing::trace;

use crate::trigger_core::{TriggerCore, TriggerOutcome};
use crate::{DebounceError, DebounceResult, Uint};

/// Core implementation of classic trailing-edge debouncing.
///
/// Every trigger cancels the pending timer and replaces it with one that
/// elapses `window_ticks` later. The action becomes due only once a full
/// window passes with no further triggers, so a burst collapses into a
/// single invocation after the burst settles.
///
/// # Timer Replacement
///
/// - Trigger at `t`: timer armed for `t + window_ticks`
/// - Trigger at `t' < t + window_ticks`: old timer dropped, new one armed for `t' + window_ticks`
/// - `poll_at(d)` with `d >= deadline`: due once, timer cleared
///
/// # Example
///
/// ```rust
/// use scroll_guard_core::debouncers::TrailingEdgeCore;
/// use scroll_guard_core::{TriggerCore, TriggerOutcome};
///
/// let core = TrailingEdgeCore::new(100);
///
/// core.trigger_at(0).unwrap();
/// core.trigger_at(30).unwrap();
/// assert_eq!(core.trigger_at(60), Ok(TriggerOutcome::Scheduled { deadline: 160 }));
///
/// assert_eq!(core.poll_at(159), Ok(false));
/// assert_eq!(core.poll_at(160), Ok(true));
/// assert_eq!(core.poll_at(200), Ok(false));
/// ```
pub struct TrailingEdgeCore {
    /// Quiet period required before the action becomes due
    window_ticks: Uint,
    /// Internal state protected by mutex for thread safety
    state: Mutex<TrailingEdgeCoreState>,
}

/// Internal state of the trailing-edge core
struct TrailingEdgeCoreState {
    /// Deadline of the single outstanding timer
    deadline: Option<Uint>,
    /// A timer elapsed before anyone polled it and was then replaced by a new trigger
    overdue: bool,
    /// Most recent tick observed by either trigger or poll
    last_tick: Uint,
}

impl TrailingEdgeCore {
    /// Creates a new trailing-edge core with a quiet period of `window_ticks`.
    ///
    /// A zero window makes the action due on the same tick as the trigger.
    pub fn new(window_ticks: Uint) -> Self {
        TrailingEdgeCore {
            window_ticks,
            state: Mutex::new(TrailingEdgeCoreState {
                deadline: None,
                overdue: false,
                last_tick: 0,
            }),
        }
    }

    /// Quiet period in ticks.
    pub fn window_ticks(&self) -> Uint {
        self.window_ticks
    }
}

impl TriggerCore for TrailingEdgeCore {
    fn trigger_at(&self, tick: Uint) -> DebounceResult<TriggerOutcome> {
        // Attempt to acquire the lock, return contention error if unavailable
        let mut state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(_) => return Err(DebounceError::ContentionFailure),
        };

        // Ticks never go backwards across triggers and polls
        if tick < state.last_tick {
            return Err(DebounceError::ExpiredTick {
                min_acceptable_tick: state.last_tick,
            });
        }
        state.last_tick = tick;

        // An elapsed timer is never silently replaced; it stays owed to the next poll.
        if matches!(state.deadline, Some(deadline) if tick >= deadline) {
            state.overdue = true;
        }

        // Drop the old timer and arm a fresh one a full window from now
        let deadline = tick.saturating_add(self.window_ticks);
        if let Some(previous) = state.deadline.replace(deadline) {
            trace!(tick, previous, deadline, "pending timer replaced");
        }
        Ok(TriggerOutcome::Scheduled { deadline })
    }

    fn poll_at(&self, tick: Uint) -> DebounceResult<bool> {
        let mut state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(_) => return Err(DebounceError::ContentionFailure),
        };

        if tick < state.last_tick {
            return Err(DebounceError::ExpiredTick {
                min_acceptable_tick: state.last_tick,
            });
        }
        state.last_tick = tick;

        // Pay out a timer that elapsed before it was replaced
        if state.overdue {
            state.overdue = false;
            return Ok(true);
        }

        // Due once the quiet period has passed; the timer is consumed
        match state.deadline {
            Some(deadline) if tick >= deadline => {
                state.deadline = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn pending_deadline(&self) -> Option<Uint> {
        let state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.deadline
    }

    fn cancel(&self) {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.deadline = None;
        state.overdue = false;
    }
}
