//! Progress fill animation
//!
//! Gauges ease from their previous value to the new share over a fixed
//! duration. Values are computed from elapsed time at draw, so no timer
//! task is involved.

use std::time::{Duration, Instant};

/// Default fill duration
pub const DEFAULT_FILL_DURATION: Duration = Duration::from_millis(800);

/// Eased interpolation between two fill fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl FillAnimation {
    pub fn starting_at(from: f64, to: f64, duration: Duration, started: Instant) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            started,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Fill fraction at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        let t = progress(now.saturating_duration_since(self.started), self.duration);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub fn value(&self) -> f64 {
        self.value_at(Instant::now())
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished_at(Instant::now())
    }
}

/// Linear progress in `[0, 1]`; a zero duration is already done
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin_and_ends_at_target() {
        let start = Instant::now();
        let anim = FillAnimation::starting_at(0.0, 0.66, Duration::from_millis(800), start);

        assert_eq!(anim.value_at(start), 0.0);
        assert!((anim.value_at(start + Duration::from_millis(800)) - 0.66).abs() < 1e-12);
        assert!((anim.value_at(start + Duration::from_secs(5)) - 0.66).abs() < 1e-12);
        assert!(anim.is_finished_at(start + Duration::from_millis(800)));
        assert!(!anim.is_finished_at(start + Duration::from_millis(799)));
    }

    #[test]
    fn test_monotone() {
        let start = Instant::now();
        let anim = FillAnimation::starting_at(0.0, 0.35, Duration::from_millis(500), start);

        let mut last = 0.0;
        for ms in (0..=600).step_by(25) {
            let v = anim.value_at(start + Duration::from_millis(ms));
            assert!(v >= last, "value went backwards at {ms}ms");
            assert!(v <= 0.35 + 1e-12);
            last = v;
        }
    }

    #[test]
    fn test_midway_is_strictly_between() {
        let start = Instant::now();
        let anim = FillAnimation::starting_at(0.0, 1.0, Duration::from_millis(1000), start);
        let mid = anim.value_at(start + Duration::from_millis(500));
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_before_start_clamps() {
        let start = Instant::now() + Duration::from_secs(1);
        let anim = FillAnimation::starting_at(0.2, 0.8, Duration::from_millis(500), start);
        assert_eq!(anim.value_at(Instant::now()), 0.2);
    }

    #[test]
    fn test_targets_are_clamped() {
        let anim = FillAnimation::starting_at(0.0, 1.7, Duration::ZERO, Instant::now());
        assert_eq!(anim.target(), 1.0);
        assert_eq!(anim.value(), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert_eq!(progress(Duration::from_millis(250), Duration::from_millis(1000)), 0.25);
    }
}
