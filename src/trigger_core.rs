//! Core trait for debounce algorithms.
//!
//! This module defines the unified trait used by the leading-edge and
//! trailing-edge debounce cores, so a [`Debouncer`](crate::Debouncer) can
//! drive either one without knowing which policy it holds.

pub use crate::types::Uint;
use crate::DebounceResult;

/// What a single trigger signal resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The action must run now, synchronously with the trigger.
    FireNow,
    /// The action is scheduled to run once `deadline` is reached.
    Scheduled { deadline: Uint },
    /// The trigger was absorbed by an active cooldown.
    Suppressed,
}

/// The core trait for all debounce algorithms.
///
/// Implementors own at most one pending timer. A core never runs the action
/// itself; it only tells the caller when the action is due.
pub trait TriggerCore: Send + Sync {
    /// Registers a trigger signal at the given tick.
    ///
    /// # Arguments
    /// * `tick` - Current time tick (from the application)
    ///
    /// # Returns
    /// * `Ok(TriggerOutcome)` describing whether the action fires now, later, or not at all
    /// * `Err(DebounceError)` if the tick went backwards or the state is contended
    fn trigger_at(&self, tick: Uint) -> DebounceResult<TriggerOutcome>;

    /// Advances the core to `tick` and reports whether a deferred invocation is due.
    ///
    /// Returns `Ok(true)` exactly once per satisfied window.
    fn poll_at(&self, tick: Uint) -> DebounceResult<bool>;

    /// Tick at which the outstanding timer elapses, if any.
    fn pending_deadline(&self) -> Option<Uint>;

    /// Drops the outstanding timer without running anything.
    fn cancel(&self);

    /// Whether a timer is currently outstanding.
    fn is_pending(&self) -> bool {
        self.pending_deadline().is_some()
    }
}
