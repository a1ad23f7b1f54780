//! Debouncing and viewport visibility activation for scroll-driven pages.
//!
//! This library provides the reusable logic behind a page's scroll effects:
//! collapsing bursts of scroll/resize signals into bounded work, and deciding
//! which measured regions of a document are "active" for a given viewport.
//! It never touches a display; hosts feed it plain numbers and apply the
//! effects it reports.
//!
//! # Quick Start
//!
//! ```rust
//! use scroll_guard_core::{wrap, RateLimiterConfig};
//!
//! // Collapse a burst of triggers into one call after 100 quiet ticks
//! let mut refresh = wrap(|| "refreshed", RateLimiterConfig::trailing(100)).unwrap();
//!
//! assert_eq!(refresh.trigger_at(0), Ok(None));
//! assert_eq!(refresh.trigger_at(60), Ok(None));
//! assert_eq!(refresh.advance_to(160), Ok(Some("refreshed")));
//! ```
//!
//! # Debouncing
//!
//! ## [Leading Edge](debouncers::LeadingEdgeCore)
//! Fires on the first trigger of a burst and ignores the rest of the window:
//! ```rust
//! # use scroll_guard_core::debouncers::LeadingEdgeCore;
//! let core = LeadingEdgeCore::new(100); // 100-tick cooldown
//! ```
//!
//! ## [Trailing Edge](debouncers::TrailingEdgeCore)
//! Fires once after the burst has been quiet for a full window:
//! ```rust
//! # use scroll_guard_core::debouncers::TrailingEdgeCore;
//! let core = TrailingEdgeCore::new(100); // 100 quiet ticks
//! ```
//!
//! [`Debouncer`] drives either core from host-supplied ticks;
//! [`ScheduledDebouncer`] drives it from a tokio timer.
//!
//! # Visibility
//!
//! ```rust
//! use scroll_guard_core::visibility::{
//!     ActivationMode, IntersectionRule, Region, Viewport, ViewportMargin, VisibilityActivator,
//! };
//!
//! let images = vec![Region::new("gallery-1", 1200, 300).unwrap()];
//! let rule = IntersectionRule::intersects(ViewportMargin::default(), 0.0).unwrap();
//! let mut lazy = VisibilityActivator::new(images, rule, ActivationMode::OneShot).unwrap();
//!
//! assert!(lazy.evaluate(&Viewport::new(0, 800).unwrap()).is_empty());
//! assert_eq!(lazy.evaluate(&Viewport::new(500, 800).unwrap()).active.len(), 1);
//! // Already handled; never reported again
//! assert!(lazy.evaluate(&Viewport::new(520, 800).unwrap()).is_empty());
//! ```
//!
//! # Core Concepts
//!
//! ## Time Representation
//! Debouncers use abstract "ticks" for time. [`ScheduledDebouncer`] and
//! [`host::ScrollHost`] treat one tick as one millisecond.
//!
//! ## Error Handling
//! - [`ConfigError`] - invalid configuration, rejected at construction
//! - [`DebounceError`] - time went backwards, or the state was contended
//! - [`GeometryError`] - invalid measurements supplied by the host
//!
//! Action failures are never caught: a debounced action's return value goes
//! straight back to whoever caused it to run.

pub mod config;
pub mod debouncer;
pub mod debouncers;
pub mod error;
pub mod host;
pub mod scheduled;
pub mod scroll_effects;
pub mod trigger_core;
pub mod types;
pub mod visibility;

pub use config::PageConfig;
pub use debouncer::{wrap, Debouncer, RateLimiterConfig};
pub use error::{ConfigError, DebounceError, DebounceResult, Error, GeometryError, Result};
pub use host::{Effect, GeometrySignal, PageLayout, ScrollHost};
pub use scheduled::ScheduledDebouncer;
pub use trigger_core::{TriggerCore, TriggerOutcome};
pub use types::{Offset, Uint};
