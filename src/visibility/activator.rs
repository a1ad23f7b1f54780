use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::visibility::region::{Region, RegionId, Viewport};
use crate::visibility::rule::IntersectionRule;
use crate::{Error, GeometryError};

/// How a region's activation is tracked across evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Activate at most once, then retire (lazy loading, fade-in).
    OneShot,
    /// Re-evaluate on every geometry change (navigation highlighting).
    Continuous,
}

/// Per-region state.
///
/// One-shot: `Unobserved -> Active -> Retired`, `Retired` is terminal.
/// Continuous: `Inactive <-> Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionState {
    Unobserved,
    Inactive,
    Active,
    Retired,
}

/// Picks one region when several are active at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Last active region in iteration order.
    #[default]
    LastMatch,
    /// First active region in iteration order.
    FirstMatch,
}

/// Outcome of one evaluation. Recomputed from scratch every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationResult {
    /// Regions active under the rule, in iteration order. In one-shot mode
    /// only regions activated by this evaluation appear here.
    pub active: Vec<RegionId>,
    /// Regions that became active since the previous evaluation.
    pub entered: Vec<RegionId>,
    /// Regions that stopped being active since the previous evaluation.
    pub left: Vec<RegionId>,
    /// One-shot regions that match the geometry but were already handled.
    pub retired: Vec<RegionId>,
}

impl ActivationResult {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.active.contains(id)
    }

    /// Reconciles overlapping matches down to a single region.
    pub fn current(&self, tie_break: TieBreak) -> Option<&RegionId> {
        match tie_break {
            TieBreak::LastMatch => self.active.last(),
            TieBreak::FirstMatch => self.active.first(),
        }
    }
}

/// Evaluates `rule` against every region without keeping any state.
///
/// For fixed arguments the result is always the same.
///
/// # Example
///
/// ```rust
/// use scroll_guard_core::visibility::{evaluate, IntersectionRule, Region, Viewport};
///
/// let sections = vec![
///     Region::new("home", 0, 600).unwrap(),
///     Region::new("services", 600, 900).unwrap(),
/// ];
/// let rule = IntersectionRule::offset_passed(150);
///
/// let result = evaluate(&sections, &Viewport::new(500, 800).unwrap(), &rule);
/// assert_eq!(result.active.len(), 2);
/// ```
pub fn evaluate<'a, I>(regions: I, viewport: &Viewport, rule: &IntersectionRule) -> ActivationResult
where
    I: IntoIterator<Item = &'a Region>,
{
    let active = regions
        .into_iter()
        .filter(|region| rule.matches(region, viewport))
        .map(|region| region.id().clone())
        .collect::<Vec<_>>();
    ActivationResult {
        entered: active.clone(),
        active,
        ..ActivationResult::default()
    }
}

/// Tracks activation of a fixed set of regions across viewport samples.
///
/// Regions are enumerated once at construction. Every call to
/// [`evaluate`](Self::evaluate) takes a fresh [`Viewport`]; nothing about
/// the viewport is cached between calls.
///
/// In one-shot mode a region that activates stays `Active` until the next
/// evaluation (or an explicit [`retire`](Self::retire)) and is `Retired`
/// from then on, so the host applies its side effect exactly once.
#[derive(Debug, Clone)]
pub struct VisibilityActivator {
    regions: Vec<Region>,
    states: Vec<RegionState>,
    index: HashMap<RegionId, usize>,
    rule: IntersectionRule,
    mode: ActivationMode,
}

impl VisibilityActivator {
    /// # Errors
    ///
    /// - [`GeometryError::DuplicateRegion`] if two regions share an id
    /// - [`ConfigError::InvalidThreshold`](crate::ConfigError::InvalidThreshold) for an invalid rule
    pub fn new(regions: Vec<Region>, rule: IntersectionRule, mode: ActivationMode) -> Result<Self, Error> {
        rule.validate()?;

        let mut index = HashMap::with_capacity(regions.len());
        for (position, region) in regions.iter().enumerate() {
            if index.insert(region.id().clone(), position).is_some() {
                return Err(GeometryError::DuplicateRegion {
                    id: region.id().to_string(),
                }
                .into());
            }
        }

        let initial = match mode {
            ActivationMode::OneShot => RegionState::Unobserved,
            ActivationMode::Continuous => RegionState::Inactive,
        };
        Ok(VisibilityActivator {
            states: vec![initial; regions.len()],
            regions,
            index,
            rule,
            mode,
        })
    }

    /// Evaluates all regions against a freshly sampled viewport.
    pub fn evaluate(&mut self, viewport: &Viewport) -> ActivationResult {
        match self.mode {
            ActivationMode::OneShot => self.evaluate_one_shot(viewport),
            ActivationMode::Continuous => self.evaluate_continuous(viewport),
        }
    }

    fn evaluate_one_shot(&mut self, viewport: &Viewport) -> ActivationResult {
        let mut result = ActivationResult::default();

        for (region, state) in self.regions.iter().zip(self.states.iter_mut()) {
            if *state == RegionState::Active {
                trace!(region = %region.id(), "region retired");
                *state = RegionState::Retired;
            }

            let matched = self.rule.matches(region, viewport);
            match *state {
                RegionState::Retired => {
                    if matched {
                        result.retired.push(region.id().clone());
                    }
                }
                _ if matched => {
                    debug!(region = %region.id(), scroll = viewport.scroll_offset(), "region activated");
                    *state = RegionState::Active;
                    result.active.push(region.id().clone());
                    result.entered.push(region.id().clone());
                }
                _ => {}
            }
        }
        result
    }

    fn evaluate_continuous(&mut self, viewport: &Viewport) -> ActivationResult {
        let mut result = ActivationResult::default();

        for (region, state) in self.regions.iter().zip(self.states.iter_mut()) {
            let matched = self.rule.matches(region, viewport);
            let was_active = *state == RegionState::Active;

            if matched {
                result.active.push(region.id().clone());
            }
            match (was_active, matched) {
                (false, true) => {
                    trace!(region = %region.id(), "region entered");
                    result.entered.push(region.id().clone());
                }
                (true, false) => {
                    trace!(region = %region.id(), "region left");
                    result.left.push(region.id().clone());
                }
                _ => {}
            }
            *state = if matched {
                RegionState::Active
            } else {
                RegionState::Inactive
            };
        }
        result
    }

    /// Marks a one-shot region as handled so it is never activated again.
    ///
    /// Returns `true` if the region was not already retired. Continuous
    /// regions have no terminal state, so this is a no-op for them.
    pub fn retire(&mut self, id: &RegionId) -> Result<bool, GeometryError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| GeometryError::UnknownRegion { id: id.to_string() })?;

        if self.mode == ActivationMode::Continuous {
            return Ok(false);
        }
        let state = &mut self.states[position];
        if *state == RegionState::Retired {
            return Ok(false);
        }
        trace!(region = %id, "region retired explicitly");
        *state = RegionState::Retired;
        Ok(true)
    }

    pub fn state(&self, id: &RegionId) -> Option<RegionState> {
        self.index.get(id).map(|&position| self.states[position])
    }

    /// Number of regions that can still activate. Always the full count in continuous mode.
    pub fn observed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state != RegionState::Retired)
            .count()
    }

    /// Whether every one-shot region has been retired.
    pub fn is_exhausted(&self) -> bool {
        self.observed_count() == 0
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn rule(&self) -> &IntersectionRule {
        &self.rule
    }

    pub fn mode(&self) -> ActivationMode {
        self.mode
    }
}
