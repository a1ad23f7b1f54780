//! Intersection rules deciding whether a region counts as active.

use serde::{Deserialize, Serialize};

use crate::visibility::region::{Region, Viewport};
use crate::{ConfigError, Offset};

/// Grows (positive) or shrinks (negative) the observed window, like CSS `rootMargin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportMargin {
    /// Extends the window above the scroll offset.
    pub top: Offset,
    /// Extends the window below the viewport's bottom edge.
    pub bottom: Offset,
}

impl ViewportMargin {
    pub const fn new(top: Offset, bottom: Offset) -> Self {
        Self { top, bottom }
    }
}

/// Geometric predicate over a region and a viewport sample.
///
/// # Rules
///
/// - [`OffsetPassed`](Self::OffsetPassed): the region is active once the
///   scroll offset reaches `top - lead_in`, and stays active until the scroll
///   offset reaches the region's bottom. A zero-height region is active the
///   instant the scroll offset lands on its start.
/// - [`Intersects`](Self::Intersects): the region is active while it overlaps
///   `[scroll - margin.top, scroll + viewport_height + margin.bottom)` by a
///   strictly positive amount that is at least `threshold` of its height.
///   Zero-height regions never overlap.
///
/// A zero-height viewport matches nothing under either rule.
///
/// # Example
///
/// ```rust
/// use scroll_guard_core::visibility::{IntersectionRule, Region, Viewport};
///
/// let about = Region::new("about", 500, 200).unwrap();
/// let rule = IntersectionRule::offset_passed(150);
///
/// assert!(!rule.matches(&about, &Viewport::new(349, 800).unwrap()));
/// assert!(rule.matches(&about, &Viewport::new(350, 800).unwrap()));
/// assert!(!rule.matches(&about, &Viewport::new(700, 800).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntersectionRule {
    OffsetPassed {
        lead_in: Offset,
    },
    Intersects {
        #[serde(default)]
        margin: ViewportMargin,
        #[serde(default)]
        threshold: f64,
    },
}

impl IntersectionRule {
    pub const fn offset_passed(lead_in: Offset) -> Self {
        IntersectionRule::OffsetPassed { lead_in }
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidThreshold`] unless `0 <= threshold <= 1`.
    pub fn intersects(margin: ViewportMargin, threshold: f64) -> Result<Self, ConfigError> {
        let rule = IntersectionRule::Intersects { margin, threshold };
        rule.validate()?;
        Ok(rule)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            IntersectionRule::Intersects { threshold, .. } if !(0.0..=1.0).contains(&threshold) => {
                Err(ConfigError::InvalidThreshold { threshold })
            }
            _ => Ok(()),
        }
    }

    pub fn matches(&self, region: &Region, viewport: &Viewport) -> bool {
        if viewport.is_degenerate() {
            return false;
        }
        let scroll = viewport.scroll_offset();

        match *self {
            IntersectionRule::OffsetPassed { lead_in } => {
                let start = region.top().saturating_sub(lead_in);
                scroll >= start && (scroll < region.bottom() || scroll == start)
            }
            IntersectionRule::Intersects { margin, threshold } => {
                let window_top = scroll.saturating_sub(margin.top);
                let window_bottom = scroll
                    .saturating_add(viewport.viewport_height())
                    .saturating_add(margin.bottom);
                if window_bottom <= window_top {
                    return false;
                }

                let overlap = region.bottom().min(window_bottom).saturating_sub(region.top().max(window_top));
                overlap > 0 && overlap as f64 >= threshold * region.height() as f64
            }
        }
    }
}
