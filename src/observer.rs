//! Section visibility tracking.
//!
//! Each mounted section registers its extent in the document once. Every
//! time the viewport moves, [`VisibilityObserver::sample`] recomputes the
//! visible fraction of each registered section and reports threshold
//! crossings. Two concerns are tracked per section:
//!
//! - navigation: reports every crossing, up and down, for the page lifetime
//! - animation: reports the first upward crossing once, then stops

use thiserror::Error;
use tracing::debug;

use crate::models::SectionId;

/// Rows occupied by a section inside the scrolling document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extent {
    pub top: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// The window of document rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(offset: u32, height: u32) -> Self {
        Self { offset, height }
    }
}

/// Fraction of `extent` that falls inside `viewport`, in `[0, 1]`.
///
/// A section taller than the viewport is measured against the viewport, so
/// one that fills the screen counts as fully visible.
pub fn visible_ratio(extent: Extent, viewport: Viewport) -> f32 {
    if extent.height == 0 || viewport.height == 0 {
        return 0.0;
    }
    let top = extent.top.max(viewport.offset);
    let bottom = extent
        .bottom()
        .min(viewport.offset.saturating_add(viewport.height));
    let visible = bottom.saturating_sub(top);
    let visible_max = extent.height.min(viewport.height);
    (visible as f32 / visible_max as f32).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub section: SectionId,
    pub is_intersecting: bool,
    pub ratio: f32,
}

/// What the observer reports after a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    Visibility(VisibilityEvent),
    /// First time the section was sufficiently visible; never repeats.
    Entered(SectionId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObserveError {
    #[error("section '{0}' has no element to observe")]
    ElementMissing(SectionId),
    #[error("section '{0}' is already observed")]
    AlreadyObserved(SectionId),
}

#[derive(Debug)]
struct Registration {
    section: SectionId,
    threshold: f32,
    extent: Extent,
    intersecting: bool,
    /// Cleared once the entrance has been reported.
    watch_entrance: bool,
}

#[derive(Debug, Default)]
pub struct VisibilityObserver {
    registrations: Vec<Registration>,
    disconnected: bool,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing a section. A missing element leaves the section
    /// unobserved for good; callers log and carry on.
    pub fn observe(
        &mut self,
        section: SectionId,
        threshold: f32,
        extent: Option<Extent>,
    ) -> Result<(), ObserveError> {
        if self.registrations.iter().any(|r| r.section == section) {
            return Err(ObserveError::AlreadyObserved(section));
        }
        let extent = extent.ok_or(ObserveError::ElementMissing(section))?;
        debug!(%section, threshold, top = extent.top, height = extent.height, "observing section");
        self.registrations.push(Registration {
            section,
            threshold,
            extent,
            intersecting: false,
            watch_entrance: true,
        });
        Ok(())
    }

    /// Update a section's geometry, e.g. after the terminal was resized.
    pub fn relayout(&mut self, section: SectionId, extent: Extent) {
        match self.registrations.iter_mut().find(|r| r.section == section) {
            Some(reg) => reg.extent = extent,
            None => debug!(%section, "relayout ignored for unobserved section"),
        }
    }

    #[cfg(test)]
    pub fn is_observing(&self, section: SectionId) -> bool {
        !self.disconnected && self.registrations.iter().any(|r| r.section == section)
    }

    /// Whether the entrance concern for `section` is still live.
    #[cfg(test)]
    pub fn watching_entrance(&self, section: SectionId) -> bool {
        self.registrations
            .iter()
            .any(|r| r.section == section && r.watch_entrance)
    }

    /// Recompute visibility for every registered section and return the
    /// crossings since the previous sample, in document order.
    pub fn sample(&mut self, viewport: Viewport) -> Vec<Signal> {
        if self.disconnected {
            return Vec::new();
        }

        let mut signals = Vec::new();
        for reg in &mut self.registrations {
            let ratio = visible_ratio(reg.extent, viewport);
            let now_intersecting = ratio >= reg.threshold;
            if now_intersecting == reg.intersecting {
                continue;
            }
            reg.intersecting = now_intersecting;
            signals.push(Signal::Visibility(VisibilityEvent {
                section: reg.section,
                is_intersecting: now_intersecting,
                ratio,
            }));
            if now_intersecting && reg.watch_entrance {
                reg.watch_entrance = false;
                signals.push(Signal::Entered(reg.section));
            }
        }
        signals
    }

    /// Stop reporting anything. Called when the page goes away.
    pub fn disconnect(&mut self) {
        if !self.disconnected {
            debug!(count = self.registrations.len(), "visibility observer disconnected");
        }
        self.disconnected = true;
    }
}
