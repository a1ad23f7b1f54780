//! Page behavior configuration.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults of a typical landing page. Configuration is parsed from TOML
//! and validated as a whole, so a bad value is reported before any component
//! is built.
//!
//! ```toml
//! [nav]
//! lead_in = 150
//! tie_break = "last_match"
//!
//! [nav.debounce]
//! window_ms = 10
//! fire_on_leading_edge = true
//!
//! [reveal]
//! threshold = 0.1
//! margin = { top = 0, bottom = -100 }
//!
//! [back_to_top]
//! threshold = 300
//! ```

use serde::{Deserialize, Serialize};

use crate::debouncer::RateLimiterConfig;
use crate::visibility::{IntersectionRule, TieBreak, ViewportMargin};
use crate::{ConfigError, Offset};

/// Active navigation link tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// How far above a section's top it already counts as current.
    pub lead_in: Offset,
    /// Which section wins when several match.
    pub tie_break: TieBreak,
    /// Rate limiting of nav re-evaluation on scroll.
    pub debounce: RateLimiterConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lead_in: 150,
            tie_break: TieBreak::LastMatch,
            debounce: RateLimiterConfig::leading(10),
        }
    }
}

impl NavConfig {
    pub fn rule(&self) -> IntersectionRule {
        IntersectionRule::offset_passed(self.lead_in)
    }
}

/// Fade-in of cards and text blocks as they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub margin: ViewportMargin,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin: ViewportMargin::new(0, -100),
            threshold: 0.1,
        }
    }
}

impl RevealConfig {
    pub fn rule(&self) -> IntersectionRule {
        IntersectionRule::Intersects {
            margin: self.margin,
            threshold: self.threshold,
        }
    }
}

/// Deferred image loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImagesConfig {
    pub margin: ViewportMargin,
    pub threshold: f64,
}

impl LazyImagesConfig {
    pub fn rule(&self) -> IntersectionRule {
        IntersectionRule::Intersects {
            margin: self.margin,
            threshold: self.threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    /// Scroll offset past which the button shows.
    pub threshold: Offset,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { threshold: 300 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub enabled: bool,
    /// Fraction of the scroll offset applied as translation.
    pub factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            factor: 0.5,
        }
    }
}

/// Complete configuration for a [`ScrollHost`](crate::host::ScrollHost).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub lazy_images: LazyImagesConfig,
    pub back_to_top: BackToTopConfig,
    pub parallax: ParallaxConfig,
}

impl PageConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Checks every section; the first invalid value is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nav.debounce.window_ticks()?;
        self.reveal.rule().validate()?;
        self.lazy_images.rule().validate()?;
        if !self.parallax.factor.is_finite() {
            return Err(ConfigError::InvalidParallaxFactor {
                factor: self.parallax.factor,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_page() {
        let config = PageConfig::default();
        assert_eq!(config.nav.debounce, RateLimiterConfig::leading(10));
        assert_eq!(config.nav.lead_in, 150);
        assert_eq!(config.reveal.margin, ViewportMargin::new(0, -100));
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.lazy_images.threshold, 0.0);
        assert_eq!(config.back_to_top.threshold, 300);
        assert_eq!(config.parallax.factor, 0.5);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(PageConfig::from_toml_str("").unwrap(), PageConfig::default());
    }
}
