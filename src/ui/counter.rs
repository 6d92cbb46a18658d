// SPDX-License-Identifier: MPL-2.0
//! Count-up number for the header statistics.

use crate::config::DEFAULT_COUNTER_DURATION_MS;
use std::time::{Duration, Instant};

/// Exponential ease-out; exactly 1 once `progress` reaches 1.
#[must_use]
pub fn ease_out_expo(progress: f32) -> f32 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * progress.max(0.0))
    }
}

/// Compact display: one decimal with `K`/`M` past a thousand/million.
#[must_use]
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    end: u64,
    suffix: String,
    duration: Duration,
    started: Option<Instant>,
    progress: f32,
}

impl AnimatedCounter {
    #[must_use]
    pub fn new(end: u64) -> Self {
        Self {
            end,
            suffix: String::new(),
            duration: Duration::from_millis(DEFAULT_COUNTER_DURATION_MS),
            started: None,
            progress: 0.0,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Restarts the count from zero at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.progress = 0.0;
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(started) = self.started else {
            return;
        };
        let elapsed = now.saturating_duration_since(started);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
    }

    /// Whether the counter still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started.is_some() && self.progress < 1.0
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        (f64::from(ease_out_expo(self.progress)) * self.end as f64).floor() as u64
    }

    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", format_count(self.value()), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn easing_endpoints() {
        assert_abs_diff_eq!(ease_out_expo(0.0), 0.0, epsilon = F32_EPSILON);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.95);
    }

    #[test]
    fn formats_thousands_and_millions() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn counts_up_to_end() {
        let t0 = Instant::now();
        let mut counter = AnimatedCounter::new(120).with_suffix("+");
        assert_eq!(counter.display(), "0+");
        assert!(!counter.is_animating());

        counter.start(t0);
        assert!(counter.is_animating());

        counter.tick(t0 + Duration::from_millis(1000));
        let midway = counter.value();
        assert!(midway > 0 && midway < 120);

        counter.tick(t0 + Duration::from_millis(2000));
        assert_eq!(counter.value(), 120);
        assert_eq!(counter.display(), "120+");
        assert!(!counter.is_animating());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let mut counter = AnimatedCounter::new(7).with_duration(Duration::ZERO);
        counter.start(t0);
        counter.tick(t0);
        assert_eq!(counter.value(), 7);
    }
}
