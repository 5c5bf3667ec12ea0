//! Active-section state machine.
//!
//! `NavState` is the single owner of the highlighted navigation item and the
//! mobile menu toggle. It only changes through [`NavState::apply`], which
//! makes every transition explicit and testable without a terminal.

use tracing::debug;

use crate::models::{SectionId, Thresholds};
use crate::observer::VisibilityEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// User picked a navigation item.
    Click(SectionId),
    Visibility(VisibilityEvent),
    ToggleMenu,
    CloseMenu,
}

/// Side effect the composer must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ScrollTo(SectionId),
}

#[derive(Debug, Clone)]
pub struct NavState {
    active: SectionId,
    menu_open: bool,
    thresholds: Thresholds,
}

impl NavState {
    /// Start with `initial` highlighted and the menu closed.
    pub fn new(initial: SectionId, thresholds: Thresholds) -> Self {
        Self {
            active: initial,
            menu_open: false,
            thresholds,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn apply(&mut self, event: NavEvent) -> Option<NavEffect> {
        match event {
            NavEvent::Click(section) => {
                debug!(from = %self.active, to = %section, "nav click");
                self.active = section;
                self.menu_open = false;
                Some(NavEffect::ScrollTo(section))
            }
            NavEvent::Visibility(ev) => {
                // Last qualifying event wins; leaving the viewport never
                // changes the highlight on its own.
                if ev.is_intersecting && ev.ratio >= self.thresholds.get(ev.section) {
                    if self.active != ev.section {
                        debug!(from = %self.active, to = %ev.section, ratio = ev.ratio, "section in view");
                    }
                    self.active = ev.section;
                }
                None
            }
            NavEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                None
            }
            NavEvent::CloseMenu => {
                self.menu_open = false;
                None
            }
        }
    }

    /// Click a navigation item by its raw id. Unknown ids are dropped.
    pub fn navigate(&mut self, id: &str) -> Option<NavEffect> {
        match id.parse::<SectionId>() {
            Ok(section) => self.apply(NavEvent::Click(section)),
            Err(err) => {
                debug!(%err, "ignoring navigation to unknown section");
                None
            }
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(SectionId::Home, Thresholds::default())
    }
}
