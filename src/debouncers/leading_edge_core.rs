use std::sync::Mutex;
use tracing::trace;

use crate::trigger_core::{TriggerCore, TriggerOutcome};
use crate::{DebounceError, DebounceResult, Uint};

/// Core implementation of leading-edge ("immediate") debouncing.
///
/// The first trigger after a quiet period fires immediately and arms a
/// cooldown timer of `window_ticks`. Triggers that arrive while the cooldown
/// is pending are no-ops: they neither fire nor extend the cooldown. When the
/// cooldown elapses nothing runs; the next trigger simply fires again.
///
/// # Cooldown Boundaries
///
/// A cooldown armed at tick `t` covers `[t, t + window_ticks)`:
/// - Trigger at `t`: fires, cooldown until `t + window_ticks`
/// - Trigger inside the cooldown: suppressed
/// - Trigger at or after `t + window_ticks`: fires and re-arms
///
/// # Example
///
/// ```rust
/// use scroll_guard_core::debouncers::LeadingEdgeCore;
/// use scroll_guard_core::{TriggerCore, TriggerOutcome};
///
/// let core = LeadingEdgeCore::new(100);
///
/// assert_eq!(core.trigger_at(0), Ok(TriggerOutcome::FireNow));
/// assert_eq!(core.trigger_at(50), Ok(TriggerOutcome::Suppressed));
/// assert_eq!(core.trigger_at(150), Ok(TriggerOutcome::FireNow));
/// ```
pub struct LeadingEdgeCore {
    /// Length of the cooldown in ticks
    window_ticks: Uint,
    /// Internal state protected by mutex for thread safety
    state: Mutex<LeadingEdgeCoreState>,
}

/// Internal state of the leading-edge core
struct LeadingEdgeCoreState {
    /// Tick at which the current cooldown ends
    cooldown_until: Option<Uint>,
    /// Most recent tick observed by either trigger or poll
    last_tick: Uint,
}

impl LeadingEdgeCoreState {
    fn observe(&mut self, tick: Uint) -> DebounceResult<()> {
        // Ticks never go backwards across triggers and polls
        if tick < self.last_tick {
            return Err(DebounceError::ExpiredTick {
                min_acceptable_tick: self.last_tick,
            });
        }
        self.last_tick = tick;

        // Retire a cooldown whose end has been reached
        if matches!(self.cooldown_until, Some(until) if tick >= until) {
            self.cooldown_until = None;
        }
        Ok(())
    }
}

impl LeadingEdgeCore {
    /// Creates a new leading-edge core with a cooldown of `window_ticks`.
    ///
    /// A zero window never suppresses anything.
    pub fn new(window_ticks: Uint) -> Self {
        LeadingEdgeCore {
            window_ticks,
            state: Mutex::new(LeadingEdgeCoreState {
                cooldown_until: None,
                last_tick: 0,
            }),
        }
    }

    /// Cooldown length in ticks.
    pub fn window_ticks(&self) -> Uint {
        self.window_ticks
    }
}

impl TriggerCore for LeadingEdgeCore {
    fn trigger_at(&self, tick: Uint) -> DebounceResult<TriggerOutcome> {
        // Attempt to acquire the lock, return contention error if unavailable
        let mut state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(_) => return Err(DebounceError::ContentionFailure),
        };
        state.observe(tick)?;

        // Inside the cooldown: no fire, and the cooldown end stays where it is
        if let Some(until) = state.cooldown_until {
            trace!(tick, cooldown_until = until, "trigger suppressed during cooldown");
            return Ok(TriggerOutcome::Suppressed);
        }

        // Fire now and arm the cooldown; a zero window arms nothing
        if self.window_ticks > 0 {
            state.cooldown_until = Some(tick.saturating_add(self.window_ticks));
        }
        Ok(TriggerOutcome::FireNow)
    }

    /// Leading-edge cores never defer the action, so this only retires an
    /// elapsed cooldown and always reports `false`.
    fn poll_at(&self, tick: Uint) -> DebounceResult<bool> {
        let mut state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(_) => return Err(DebounceError::ContentionFailure),
        };
        state.observe(tick)?;
        Ok(false)
    }

    fn pending_deadline(&self) -> Option<Uint> {
        let state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.cooldown_until
    }

    fn cancel(&self) {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.cooldown_until = None;
    }
}
