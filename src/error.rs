//! error.rs
//! Defines the configuration, debounce, and geometry error types.

use crate::types::{Offset, Uint};
use thiserror::Error;

/// Invalid configuration, rejected at construction time.
///
/// Values are never clamped into range; construction fails instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The debounce window was negative.
    #[error("debounce window must be non-negative, got {window_ms} ms")]
    NegativeWindow { window_ms: i64 },

    /// An intersection threshold outside `[0, 1]`.
    #[error("intersection threshold must lie in [0, 1], got {threshold}")]
    InvalidThreshold { threshold: f64 },

    /// A parallax factor that is not finite.
    #[error("parallax factor must be finite, got {factor}")]
    InvalidParallaxFactor { factor: f64 },

    /// The configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Error type for trigger and poll operations on a debounce core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebounceError {
    /// Provided tick is older than the last observed one.
    #[error("expired tick: minimum acceptable tick is {min_acceptable_tick}")]
    ExpiredTick { min_acceptable_tick: Uint },

    /// Failed due to lock contention.
    #[error("contention failure: debounce state is locked by another operation")]
    ContentionFailure,
}

/// Result type for debounce core operations.
pub type DebounceResult<T> = std::result::Result<T, DebounceError>;

/// Precondition violations in host-supplied geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A region was measured with a negative height.
    #[error("region `{id}` has negative height {height}")]
    NegativeHeight { id: String, height: Offset },

    /// The viewport was sampled with a negative height.
    #[error("viewport height must be non-negative, got {height}")]
    NegativeViewport { height: Offset },

    /// Two regions share the same id.
    #[error("duplicate region id `{id}`")]
    DuplicateRegion { id: String },

    /// The referenced region was never registered.
    #[error("unknown region `{id}`")]
    UnknownRegion { id: String },
}

/// Umbrella error for the host-facing API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Debounce(#[from] DebounceError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result alias over the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
