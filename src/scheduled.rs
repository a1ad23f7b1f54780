//! Real-time debouncing on a tokio runtime.
//!
//! [`ScheduledDebouncer`] is the wall-clock counterpart of
//! [`Debouncer`](crate::Debouncer): `trigger` returns immediately and the
//! trailing action runs later on a timer task. Ticks are milliseconds since
//! the debouncer was created, read from [`tokio::time::Instant`] so paused
//! test clocks drive it deterministically.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;
use tracing::debug;

use crate::debouncer::RateLimiterConfig;
use crate::debouncers::core_for;
use crate::trigger_core::{TriggerCore, TriggerOutcome};
use crate::{ConfigError, DebounceError, DebounceResult, Uint};

struct Shared<A> {
    core: Box<dyn TriggerCore>,
    action: Mutex<A>,
    origin: Instant,
}

impl<A: FnMut()> Shared<A> {
    fn now_tick(&self) -> Uint {
        Uint::try_from(self.origin.elapsed().as_millis()).unwrap_or(Uint::MAX)
    }

    fn run_action(&self) {
        let mut action = self.action.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        (*action)();
    }
}

/// A debounced action whose trailing invocation runs on a tokio timer task.
///
/// At most one timer task exists per instance. In trailing mode a new
/// trigger aborts and replaces it while holding the timer slot, so
/// concurrent triggers cannot leave an older task in charge of a newer
/// deadline. In leading mode the action runs inline in `trigger` and the
/// cooldown needs no task. [`shutdown`](Self::shutdown)
/// and `Drop` abort the pending task so nothing runs after the owner is gone.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use scroll_guard_core::{RateLimiterConfig, ScheduledDebouncer};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let debounced = ScheduledDebouncer::new(
///     move || { counter.fetch_add(1, Ordering::SeqCst); },
///     RateLimiterConfig::trailing(5),
/// ).unwrap();
///
/// debounced.trigger().unwrap();
/// debounced.trigger().unwrap();
/// debounced.settle().await.unwrap();
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// # }
/// ```
pub struct ScheduledDebouncer<A> {
    shared: Arc<Shared<A>>,
    timer: Mutex<Option<JoinHandle<()>>>,
    handle: Handle,
    config: RateLimiterConfig,
}

impl<A> ScheduledDebouncer<A>
where
    A: FnMut() + Send + 'static,
{
    /// Creates a debouncer bound to the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a tokio runtime.
    pub fn new(action: A, config: RateLimiterConfig) -> Result<Self, ConfigError> {
        Self::with_handle(action, config, Handle::current())
    }

    /// Creates a debouncer whose timer tasks are spawned on `handle`.
    pub fn with_handle(action: A, config: RateLimiterConfig, handle: Handle) -> Result<Self, ConfigError> {
        let window_ticks = config.window_ticks()?;
        Ok(ScheduledDebouncer {
            shared: Arc::new(Shared {
                core: core_for(window_ticks, config.fire_on_leading_edge),
                action: Mutex::new(action),
                origin: Instant::now(),
            }),
            timer: Mutex::new(None),
            handle,
            config,
        })
    }

    /// Registers a trigger now.
    ///
    /// Leading-edge actions run before this returns; trailing-edge actions
    /// run later on the timer task. A trailing timer that already elapsed but
    /// whose task has not run yet is paid out here, before the new trigger
    /// re-arms the core.
    pub fn trigger(&self) -> DebounceResult<()> {
        let tick = self.shared.now_tick();
        if self.shared.core.poll_at(tick)? {
            debug!(tick, "overdue scheduled action fired before re-arming");
            self.shared.run_action();
        }

        let mut slot = self.timer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match self.shared.core.trigger_at(tick)? {
            TriggerOutcome::FireNow => {
                drop(slot);
                debug!(tick, "scheduled action fired on leading edge");
                self.shared.run_action();
            }
            TriggerOutcome::Scheduled { deadline } => {
                debug!(tick, deadline, "scheduled action armed");
                let task = self.spawn_timer();
                if let Some(previous) = slot.replace(task) {
                    previous.abort();
                }
            }
            TriggerOutcome::Suppressed => {}
        }
        Ok(())
    }

    /// Spawns the task that drains the core's deadlines.
    ///
    /// The task reads the deadline from the core on every pass rather than
    /// capturing it, so whichever task survives always serves the latest one.
    fn spawn_timer(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        self.handle.spawn(async move {
            while let Some(deadline) = shared.core.pending_deadline() {
                let millis = u64::try_from(deadline).unwrap_or(u64::MAX);
                tokio::time::sleep_until(shared.origin + Duration::from_millis(millis)).await;

                match shared.core.poll_at(shared.now_tick()) {
                    Ok(true) => {
                        debug!(deadline, "scheduled action fired on trailing edge");
                        shared.run_action();
                    }
                    // Deadline moved while we slept; go around for the new one
                    Ok(false) => {}
                    Err(DebounceError::ExpiredTick { .. }) | Err(DebounceError::ContentionFailure) => {
                        tokio::task::yield_now().await
                    }
                }
            }
        })
    }
}

impl<A> ScheduledDebouncer<A> {
    /// Waits for the in-flight timer task, if any.
    ///
    /// A panic inside the action surfaces here as a [`JoinError`]. A task
    /// that was aborted by [`shutdown`](Self::shutdown) resolves as `Ok`.
    pub async fn settle(&self) -> Result<(), JoinError> {
        let task = {
            let mut slot = self.timer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            slot.take()
        };
        match task {
            Some(task) => match task.await {
                Err(err) if err.is_cancelled() => Ok(()),
                other => other,
            },
            None => Ok(()),
        }
    }

    /// Cancels the pending timer and its task.
    pub fn shutdown(&self) {
        let mut slot = self.timer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = slot.take() {
            debug!("scheduled debounce timer aborted");
            task.abort();
        }
        self.shared.core.cancel();
    }

    /// Whether a timer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.shared.core.is_pending()
    }

    /// Configuration this debouncer was built from.
    pub fn config(&self) -> RateLimiterConfig {
        self.config
    }
}

impl<A> Drop for ScheduledDebouncer<A> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
