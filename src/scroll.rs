//! Scroll offset tracking and smooth scrolling.

use std::time::Duration;

/// Latest scroll reading, published for decorative use only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollTracker {
    offset: u32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, offset: u32) {
        self.offset = offset;
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

/// An in-flight animated scroll from one offset to another.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    from: u32,
    to: u32,
    elapsed: Duration,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: u32, to: u32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn target(&self) -> u32 {
        self.to
    }

    /// Advance by `delta` and return the offset to show now.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.current()
    }

    pub fn current(&self) -> u32 {
        let t = self.progress();
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        let value = from + (to - from) * ease_in_out_cubic(t);
        value.round().max(0.0) as u32
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = -2.0 * t + 2.0;
        1.0 - f * f * f / 2.0
    }
}

/// Apply a signed row delta to an offset, clamped to `[0, max]`.
pub fn scroll_by(offset: u32, delta: i64, max: u32) -> u32 {
    (i64::from(offset) + delta).clamp(0, i64::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_keeps_latest_reading() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.offset(), 0);
        tracker.record(40);
        tracker.record(12);
        assert_eq!(tracker.offset(), 12);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut anim = SmoothScroll::new(0, 120, Duration::from_millis(500));
        let mid = anim.advance(Duration::from_millis(250));
        assert!(mid > 0 && mid < 120, "midpoint was {mid}");
        assert!(!anim.is_finished());

        let end = anim.advance(Duration::from_millis(400));
        assert_eq!(end, 120);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_smooth_scroll_upwards() {
        let mut anim = SmoothScroll::new(90, 10, Duration::from_millis(100));
        let first = anim.advance(Duration::from_millis(10));
        assert!(first <= 90 && first >= 10);
        assert_eq!(anim.advance(Duration::from_millis(100)), 10);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let anim = SmoothScroll::new(5, 50, Duration::ZERO);
        assert_eq!(anim.current(), 50);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_scroll_by_clamps() {
        assert_eq!(scroll_by(0, -3, 100), 0);
        assert_eq!(scroll_by(98, 5, 100), 100);
        assert_eq!(scroll_by(10, -4, 100), 6);
    }
}
