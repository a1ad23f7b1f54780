//! Scroll-position effects that need no region measurement.

use crate::{ConfigError, Offset};

/// Boolean flag that is set while the scroll offset is strictly past a threshold.
///
/// Drives elements such as a back-to-top button. Only transitions are
/// reported so the host touches the element when something changes.
///
/// ```rust
/// use scroll_guard_core::scroll_effects::ScrollFlag;
///
/// let mut back_to_top = ScrollFlag::new(300);
/// assert_eq!(back_to_top.update(120), None);
/// assert_eq!(back_to_top.update(301), Some(true));
/// assert_eq!(back_to_top.update(900), None);
/// assert_eq!(back_to_top.update(300), Some(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFlag {
    threshold: Offset,
    raised: bool,
}

impl ScrollFlag {
    pub const fn new(threshold: Offset) -> Self {
        Self {
            threshold,
            raised: false,
        }
    }

    /// Feeds a scroll offset, returning the new value on a transition.
    pub fn update(&mut self, scroll_offset: Offset) -> Option<bool> {
        let raised = scroll_offset > self.threshold;
        if raised == self.raised {
            return None;
        }
        self.raised = raised;
        Some(raised)
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub fn threshold(&self) -> Offset {
        self.threshold
    }
}

/// Parallax translation applied while the scroll offset is within `extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    factor: f64,
    extent: Offset,
}

impl Parallax {
    /// # Errors
    ///
    /// [`ConfigError::InvalidParallaxFactor`] if `factor` is NaN or infinite.
    pub fn new(factor: f64, extent: Offset) -> Result<Self, ConfigError> {
        if !factor.is_finite() {
            return Err(ConfigError::InvalidParallaxFactor { factor });
        }
        Ok(Self { factor, extent })
    }

    /// Translation for `scroll_offset`, or `None` once scrolled past the extent,
    /// in which case the last applied translation is left as is.
    pub fn offset(&self, scroll_offset: Offset) -> Option<f64> {
        (scroll_offset < self.extent).then(|| scroll_offset as f64 * self.factor)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn extent(&self) -> Offset {
        self.extent
    }
}
