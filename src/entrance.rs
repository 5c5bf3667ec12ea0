//! Once-per-session entrance flags.

use std::time::Duration;

use crate::models::SectionId;

/// Per-section entrance flag plus the time elapsed since it was raised.
/// A raised flag is never lowered.
#[derive(Debug, Default, Clone)]
pub struct Entrances {
    since: [Option<Duration>; 7],
}

impl Entrances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag for `section`. Returns false if it was already raised.
    pub fn mark(&mut self, section: SectionId) -> bool {
        let slot = &mut self.since[section.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(Duration::ZERO);
        true
    }

    pub fn has_entered(&self, section: SectionId) -> bool {
        self.since[section.index()].is_some()
    }

    pub fn advance(&mut self, delta: Duration) {
        for elapsed in self.since.iter_mut().flatten() {
            *elapsed = elapsed.saturating_add(delta);
        }
    }

    pub fn reveal(&self, section: SectionId, duration: Duration) -> Reveal {
        Reveal {
            elapsed: self.since[section.index()],
            duration,
        }
    }
}

/// Timing of one section's entrance transition as seen by its renderer.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    elapsed: Option<Duration>,
    duration: Duration,
}

impl Reveal {
    /// Fully at rest, for previews and tests.
    pub fn settled() -> Self {
        Self {
            elapsed: Some(Duration::MAX),
            duration: Duration::ZERO,
        }
    }

    /// Not yet entered.
    pub fn hidden() -> Self {
        Self {
            elapsed: None,
            duration: Duration::ZERO,
        }
    }

    pub fn has_entered(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Transition progress in `[0, 1]` for an element starting `delay`
    /// after the section entered.
    pub fn progress(&self, delay: Duration) -> f32 {
        let Some(elapsed) = self.elapsed else {
            return 0.0;
        };
        // Without a transition there is nothing to stagger either.
        if self.duration.is_zero() {
            return 1.0;
        }
        let Some(running) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        (running.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// `progress` for the `index`-th item of a staggered list.
    pub fn staggered(&self, index: usize, step: Duration) -> f32 {
        self.progress(step.saturating_mul(index as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_mark_only_once() {
        let mut entrances = Entrances::new();
        assert!(!entrances.has_entered(SectionId::About));
        assert!(entrances.mark(SectionId::About));
        assert!(!entrances.mark(SectionId::About));
        assert!(entrances.has_entered(SectionId::About));
        assert!(!entrances.has_entered(SectionId::Blog));
    }

    #[test]
    fn test_mark_again_does_not_restart_clock() {
        let mut entrances = Entrances::new();
        entrances.mark(SectionId::Blog);
        entrances.advance(ms(800));
        entrances.mark(SectionId::Blog);
        let reveal = entrances.reveal(SectionId::Blog, ms(800));
        assert_eq!(reveal.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_progress_before_entry_is_zero() {
        let mut entrances = Entrances::new();
        entrances.advance(ms(5000));
        let reveal = entrances.reveal(SectionId::Projects, ms(800));
        assert!(!reveal.has_entered());
        assert_eq!(reveal.progress(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_staggered_progress() {
        let mut entrances = Entrances::new();
        entrances.mark(SectionId::Experience);
        entrances.advance(ms(400));
        let reveal = entrances.reveal(SectionId::Experience, ms(800));
        assert_eq!(reveal.staggered(0, ms(200)), 0.5);
        assert_eq!(reveal.staggered(1, ms(200)), 0.25);
        assert_eq!(reveal.staggered(2, ms(200)), 0.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut entrances = Entrances::new();
        entrances.mark(SectionId::Home);
        let reveal = entrances.reveal(SectionId::Home, Duration::ZERO);
        assert_eq!(reveal.progress(Duration::ZERO), 1.0);
        assert_eq!(reveal.staggered(3, ms(200)), 1.0);
        assert_eq!(Reveal::settled().progress(ms(600)), 1.0);
        assert_eq!(Reveal::hidden().progress(Duration::ZERO), 0.0);
    }
}
