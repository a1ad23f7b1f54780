//! Measured regions and viewport samples.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GeometryError, Offset};

/// Identifier of an observed region, e.g. a section's `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        RegionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        RegionId::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        RegionId(id)
    }
}

/// A rectangle in document-flow coordinates, measured once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    id: RegionId,
    top: Offset,
    height: Offset,
}

impl Region {
    /// Creates a region spanning `[top, top + height)`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NegativeHeight`] if `height < 0`.
    pub fn new(id: impl Into<RegionId>, top: Offset, height: Offset) -> Result<Self, GeometryError> {
        let id = id.into();
        if height < 0 {
            return Err(GeometryError::NegativeHeight {
                id: id.to_string(),
                height,
            });
        }
        Ok(Region { id, top, height })
    }

    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn top(&self) -> Offset {
        self.top
    }

    pub fn height(&self) -> Offset {
        self.height
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> Offset {
        self.top.saturating_add(self.height)
    }
}

/// Scroll position and viewport size, sampled fresh for every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    scroll_offset: Offset,
    viewport_height: Offset,
}

impl Viewport {
    /// # Errors
    ///
    /// [`GeometryError::NegativeViewport`] if `viewport_height < 0`.
    pub fn new(scroll_offset: Offset, viewport_height: Offset) -> Result<Self, GeometryError> {
        if viewport_height < 0 {
            return Err(GeometryError::NegativeViewport {
                height: viewport_height,
            });
        }
        Ok(Viewport {
            scroll_offset,
            viewport_height,
        })
    }

    pub fn scroll_offset(&self) -> Offset {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> Offset {
        self.viewport_height
    }

    /// A zero-height viewport observes nothing.
    pub fn is_degenerate(&self) -> bool {
        self.viewport_height == 0
    }
}
