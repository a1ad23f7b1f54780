//! The triggerable returned by [`wrap`].
//!
//! A [`Debouncer`] pairs an action with a debounce core and runs the action
//! on the host's thread of control whenever the core says it is due. Time is
//! supplied explicitly by the host loop through [`Debouncer::trigger_at`] and
//! [`Debouncer::advance_to`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::debouncers::core_for;
use crate::trigger_core::{TriggerCore, TriggerOutcome};
use crate::{ConfigError, DebounceResult, Uint};

/// Debounce window and edge policy.
///
/// `window_ms` is signed so that a negative window read from configuration
/// can be reported rather than silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimiterConfig {
    /// Window length, in milliseconds (one tick per millisecond).
    pub window_ms: i64,
    /// Fire on the first trigger of a burst instead of after it settles.
    pub fire_on_leading_edge: bool,
}

impl RateLimiterConfig {
    /// Leading-edge configuration with the given window.
    pub const fn leading(window_ms: i64) -> Self {
        Self {
            window_ms,
            fire_on_leading_edge: true,
        }
    }

    /// Trailing-edge configuration with the given window.
    pub const fn trailing(window_ms: i64) -> Self {
        Self {
            window_ms,
            fire_on_leading_edge: false,
        }
    }

    /// Checks the configuration and returns the window as ticks.
    pub fn window_ticks(&self) -> Result<Uint, ConfigError> {
        Uint::try_from(self.window_ms).map_err(|_| ConfigError::NegativeWindow {
            window_ms: self.window_ms,
        })
    }
}

impl Default for RateLimiterConfig {
    /// 10 ms, leading edge.
    fn default() -> Self {
        Self::leading(10)
    }
}

/// Wraps `action` so that repeated triggers collapse into at most one
/// invocation per window.
///
/// # Errors
///
/// Returns [`ConfigError::NegativeWindow`] when `config.window_ms < 0`.
///
/// # Example
///
/// ```rust
/// use scroll_guard_core::{wrap, RateLimiterConfig};
///
/// let mut calls = 0;
/// let mut debounced = wrap(|| calls += 1, RateLimiterConfig::trailing(100)).unwrap();
///
/// for tick in [0, 30, 60] {
///     assert_eq!(debounced.trigger_at(tick), Ok(None));
/// }
/// assert_eq!(debounced.advance_to(159), Ok(None));
/// assert_eq!(debounced.advance_to(160), Ok(Some(())));
/// drop(debounced);
/// assert_eq!(calls, 1);
/// ```
pub fn wrap<A, R>(action: A, config: RateLimiterConfig) -> Result<Debouncer<A>, ConfigError>
where
    A: FnMut() -> R,
{
    Debouncer::new(action, config)
}

/// A rate-limited action driven by host-supplied ticks.
///
/// The action's return value is handed back to whoever caused it to run, so
/// an action returning `Result` propagates its failure to that caller; panics
/// unwind through the same call. The debouncer itself never catches, retries,
/// or logs action failures.
pub struct Debouncer<A> {
    core: Box<dyn TriggerCore>,
    action: A,
    config: RateLimiterConfig,
}

impl<A, R> Debouncer<A>
where
    A: FnMut() -> R,
{
    /// See [`wrap`].
    pub fn new(action: A, config: RateLimiterConfig) -> Result<Self, ConfigError> {
        let window_ticks = config.window_ticks()?;
        Ok(Debouncer {
            core: core_for(window_ticks, config.fire_on_leading_edge),
            action,
            config,
        })
    }

    /// Registers a trigger at `tick`.
    ///
    /// Returns `Some` with the action's output when the action ran during
    /// this call: on the leading edge, or because a trailing timer had
    /// already elapsed at `tick` and must run before the new trigger re-arms it.
    pub fn trigger_at(&mut self, tick: Uint) -> DebounceResult<Option<R>> {
        if let Some(output) = self.advance_to(tick)? {
            self.core.trigger_at(tick)?;
            return Ok(Some(output));
        }

        match self.core.trigger_at(tick)? {
            TriggerOutcome::FireNow => {
                debug!(tick, "debounced action fired on leading edge");
                Ok(Some((self.action)()))
            }
            TriggerOutcome::Scheduled { deadline } => {
                debug!(tick, deadline, "debounced action scheduled");
                Ok(None)
            }
            TriggerOutcome::Suppressed => Ok(None),
        }
    }

    /// Advances time to `tick`, running the action if a trailing timer elapsed.
    pub fn advance_to(&mut self, tick: Uint) -> DebounceResult<Option<R>> {
        if self.core.poll_at(tick)? {
            debug!(tick, "debounced action fired on trailing edge");
            return Ok(Some((self.action)()));
        }
        Ok(None)
    }
}

impl<A> Debouncer<A> {
    /// Drops the pending timer, if any, without running the action.
    pub fn cancel(&self) {
        if self.core.is_pending() {
            debug!("pending debounce timer cancelled");
        }
        self.core.cancel();
    }

    /// Whether a timer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.core.is_pending()
    }

    /// Tick at which the outstanding timer elapses.
    pub fn pending_deadline(&self) -> Option<Uint> {
        self.core.pending_deadline()
    }

    /// Configuration this debouncer was built from.
    pub fn config(&self) -> RateLimiterConfig {
        self.config
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        self.core.cancel();
    }
}

impl<A> std::fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("config", &self.config)
            .field("pending_deadline", &self.core.pending_deadline())
            .finish_non_exhaustive()
    }
}
