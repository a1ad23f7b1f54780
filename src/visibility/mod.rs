//! Viewport-intersection-driven visibility activation.
//!
//! A host measures its regions once, samples the viewport on every geometry
//! change, and asks which regions are active under an [`IntersectionRule`].
//! [`evaluate`] is the stateless form; [`VisibilityActivator`] adds one-shot
//! retirement and continuous enter/leave tracking on top of it.

pub mod activator;
pub mod region;
pub mod rule;

pub use activator::{evaluate, ActivationMode, ActivationResult, RegionState, TieBreak, VisibilityActivator};
pub use region::{Region, RegionId, Viewport};
pub use rule::{IntersectionRule, ViewportMargin};
