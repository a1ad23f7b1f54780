//! Explicit signal ingestion for a scroll-driven page.
//!
//! [`ScrollHost`] owns every piece of page-level state: the last geometry
//! reported by the environment, the nav debouncer, the activators, and the
//! scroll flags. The environment feeds it [`GeometrySignal`]s in arrival order
//! and applies the returned [`Effect`]s; nothing here touches a display.

use tracing::{debug, trace};

use crate::config::PageConfig;
use crate::debouncers::core_for;
use crate::trigger_core::{TriggerCore, TriggerOutcome};
use crate::scroll_effects::{Parallax, ScrollFlag};
use crate::visibility::{ActivationMode, Region, RegionId, TieBreak, Viewport, VisibilityActivator};
use crate::{Offset, Result, Uint};

/// Regions measured once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Sections that nav links point at, in document order.
    pub sections: Vec<Region>,
    /// Elements that fade in once.
    pub reveal_targets: Vec<Region>,
    /// Images whose source is swapped in once.
    pub lazy_images: Vec<Region>,
    /// Region whose height bounds the parallax effect.
    pub hero: Option<Region>,
}

/// A geometry change reported by the environment. `at` is in ticks (ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometrySignal {
    Scroll { offset: Offset, at: Uint },
    Resize { viewport_height: Offset, at: Uint },
    /// Time passed with no geometry change; lets a pending nav timer elapse.
    Tick { at: Uint },
}

/// Side effect for the environment to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fade the element in. Emitted once per element.
    Reveal(RegionId),
    /// Swap in the deferred image source. Emitted once per image.
    LoadImage(RegionId),
    /// Move the active nav highlight to this section.
    HighlightNav(RegionId),
    /// Show or hide the back-to-top button.
    BackToTop(bool),
    /// Translate the hero content by this many pixels.
    Parallax(f64),
}

/// Page context replacing ambient globals with owned state.
pub struct ScrollHost {
    scroll_offset: Offset,
    viewport_height: Offset,
    nav_core: Box<dyn TriggerCore>,
    /// A nav refresh was suppressed by the cooldown and is still owed.
    nav_stale: bool,
    nav: VisibilityActivator,
    tie_break: TieBreak,
    highlighted: Option<RegionId>,
    reveal: VisibilityActivator,
    lazy_images: VisibilityActivator,
    back_to_top: ScrollFlag,
    parallax: Option<Parallax>,
}

impl ScrollHost {
    /// Builds the host from validated configuration and measured layout.
    pub fn new(config: &PageConfig, layout: PageLayout, viewport: Viewport) -> Result<Self> {
        config.validate()?;

        let parallax = match (&layout.hero, config.parallax.enabled) {
            (Some(hero), true) => Some(Parallax::new(config.parallax.factor, hero.height())?),
            _ => None,
        };

        Ok(ScrollHost {
            scroll_offset: viewport.scroll_offset(),
            viewport_height: viewport.viewport_height(),
            nav_core: core_for(config.nav.debounce.window_ticks()?, config.nav.debounce.fire_on_leading_edge),
            nav_stale: false,
            nav: VisibilityActivator::new(layout.sections, config.nav.rule(), ActivationMode::Continuous)?,
            tie_break: config.nav.tie_break,
            highlighted: None,
            reveal: VisibilityActivator::new(layout.reveal_targets, config.reveal.rule(), ActivationMode::OneShot)?,
            lazy_images: VisibilityActivator::new(
                layout.lazy_images,
                config.lazy_images.rule(),
                ActivationMode::OneShot,
            )?,
            back_to_top: ScrollFlag::new(config.back_to_top.threshold),
            parallax,
        })
    }

    /// Processes one signal and returns the effects it produced, in order.
    pub fn ingest(&mut self, signal: GeometrySignal) -> Result<Vec<Effect>> {
        trace!(?signal, "geometry signal");
        let mut effects = Vec::new();

        match signal {
            GeometrySignal::Scroll { offset, at } => {
                // Rejected signals leave every piece of state untouched.
                let viewport = Viewport::new(offset, self.viewport_height)?;
                let nav_due = self.trigger_nav(at)?;
                self.scroll_offset = offset;

                if let Some(visible) = self.back_to_top.update(offset) {
                    effects.push(Effect::BackToTop(visible));
                }
                if let Some(translation) = self.parallax.and_then(|parallax| parallax.offset(offset)) {
                    effects.push(Effect::Parallax(translation));
                }
                self.activate_one_shots(&viewport, &mut effects);
                if nav_due {
                    self.refresh_nav(&viewport, &mut effects);
                }
            }
            GeometrySignal::Resize { viewport_height, at } => {
                let viewport = Viewport::new(self.scroll_offset, viewport_height)?;
                let nav_due = self.trigger_nav(at)?;
                self.viewport_height = viewport_height;

                self.activate_one_shots(&viewport, &mut effects);
                if nav_due {
                    self.refresh_nav(&viewport, &mut effects);
                }
            }
            GeometrySignal::Tick { at } => {
                if self.poll_nav(at)? {
                    let viewport = self.viewport()?;
                    self.refresh_nav(&viewport, &mut effects);
                }
            }
        }
        Ok(effects)
    }

    /// Feeds a geometry change to the nav debounce; `true` when nav must be
    /// re-evaluated now.
    fn trigger_nav(&mut self, at: Uint) -> Result<bool> {
        // An elapsed trailing timer is paid out before the trigger re-arms it
        let owed = self.nav_core.poll_at(at)?;
        let due = match self.nav_core.trigger_at(at)? {
            TriggerOutcome::FireNow => true,
            TriggerOutcome::Scheduled { .. } => owed,
            TriggerOutcome::Suppressed => {
                self.nav_stale = true;
                owed
            }
        };
        if due {
            self.nav_stale = false;
        }
        Ok(due)
    }

    /// Lets time pass for the nav debounce; `true` when a trailing timer
    /// elapsed or a suppressed refresh can now be caught up.
    fn poll_nav(&mut self, at: Uint) -> Result<bool> {
        let elapsed = self.nav_core.poll_at(at)?;
        // Leading edge: the cooldown has ended and the last geometry was never evaluated
        let catch_up = self.nav_stale && !self.nav_core.is_pending();
        if elapsed || catch_up {
            trace!(at, elapsed, catch_up, "nav refresh due");
            self.nav_stale = false;
            return Ok(true);
        }
        Ok(false)
    }

    fn viewport(&self) -> Result<Viewport> {
        Ok(Viewport::new(self.scroll_offset, self.viewport_height)?)
    }

    fn activate_one_shots(&mut self, viewport: &Viewport, effects: &mut Vec<Effect>) {
        let revealed = self.reveal.evaluate(viewport);
        effects.extend(revealed.active.into_iter().map(Effect::Reveal));

        let loaded = self.lazy_images.evaluate(viewport);
        effects.extend(loaded.active.into_iter().map(Effect::LoadImage));
    }

    fn refresh_nav(&mut self, viewport: &Viewport, effects: &mut Vec<Effect>) {
        let result = self.nav.evaluate(viewport);
        let Some(current) = result.current(self.tie_break) else {
            return;
        };
        if self.highlighted.as_ref() == Some(current) {
            return;
        }
        debug!(section = %current, "nav highlight moved");
        self.highlighted = Some(current.clone());
        effects.push(Effect::HighlightNav(current.clone()));
    }

    /// Section currently highlighted in the navigation.
    pub fn highlighted(&self) -> Option<&RegionId> {
        self.highlighted.as_ref()
    }

    pub fn scroll_offset(&self) -> Offset {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> Offset {
        self.viewport_height
    }

    /// Whether every reveal target and lazy image has been handled.
    pub fn one_shots_exhausted(&self) -> bool {
        self.reveal.is_exhausted() && self.lazy_images.is_exhausted()
    }

    /// Drops the pending nav timer and any owed refresh.
    pub fn shutdown(&mut self) {
        self.nav_core.cancel();
        self.nav_stale = false;
    }
}
