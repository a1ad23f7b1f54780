//! Core debounce algorithm implementations.
//!
//! Each core is a small, thread-safe state machine over abstract ticks. It
//! owns at most one pending timer and only reports when the wrapped action is
//! due; running the action is left to [`Debouncer`](crate::Debouncer) or
//! [`ScheduledDebouncer`](crate::ScheduledDebouncer).
//!
//! # Available Policies
//!
//! - **[`LeadingEdgeCore`]** - Fire on the first trigger, ignore the rest of the window
//! - **[`TrailingEdgeCore`]** - Fire once after the burst settles
//!
//! | Policy | Fires | Triggers during window | Trailing call |
//! |--------|-------|------------------------|---------------|
//! | Leading edge | Immediately | No-op | Never |
//! | Trailing edge | `window` after last trigger | Reset the timer | Always |

pub mod leading_edge_core;
pub use leading_edge_core::LeadingEdgeCore;

pub mod trailing_edge_core;
pub use trailing_edge_core::TrailingEdgeCore;

use crate::trigger_core::TriggerCore;
use crate::Uint;

/// Builds the core matching the requested edge policy.
pub fn core_for(window_ticks: Uint, fire_on_leading_edge: bool) -> Box<dyn TriggerCore> {
    if fire_on_leading_edge {
        Box::new(LeadingEdgeCore::new(window_ticks))
    } else {
        Box::new(TrailingEdgeCore::new(window_ticks))
    }
}
