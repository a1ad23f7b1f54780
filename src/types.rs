//! Scalar aliases shared by the debounce and geometry layers.
//!
//! Time is a monotonically increasing count of ticks, one per millisecond,
//! supplied by whoever drives the debouncers. Geometry is measured in signed
//! whole pixels along the document flow.
//!
//! The tick width is a build-time choice: `tick-u64` (the default) or
//! `tick-u128` for hosts that count from an epoch far in the past. Picking
//! both is rejected at compile time; picking neither falls back to `u64`.

#[cfg(all(feature = "tick-u64", feature = "tick-u128"))]
compile_error!("features `tick-u64` and `tick-u128` are mutually exclusive");

/// Tick and debounce-window type.
///
/// Deadlines are computed with saturating addition, so a window that would
/// overflow simply never elapses instead of wrapping around to the past.
#[cfg(not(feature = "tick-u128"))]
pub type Uint = u64;

/// Tick and debounce-window type, widened by the `tick-u128` feature.
#[cfg(all(feature = "tick-u128", not(feature = "tick-u64")))]
pub type Uint = u128;

/// Signed document-flow coordinate, in whole CSS pixels.
///
/// Offsets are signed so that margins can shrink the observed window and
/// lead-ins can push a region's start above the document top.
pub type Offset = i64;
