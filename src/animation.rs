// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Progress animation driver.
//!
//! The host owns the clock: it calls `tick` with the elapsed time and the
//! driver hands back the eased progress value for that moment. Starting a
//! new animation simply replaces the previous driver.

use crate::settings;
use std::time::Duration;

/// Eases progress from one value to another over a fixed duration
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDriver {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl ProgressDriver {
    /// Animate from `from` to `to` over the default duration
    pub fn new(from: f64, to: f64) -> Self {
        Self::with_duration(from, to, settings::animation::PROGRESS_DURATION)
    }

    pub fn with_duration(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Target value
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear fraction of the duration that has elapsed, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased value at the current time
    pub fn value(&self) -> f64 {
        let t = ease_in_out(self.fraction());
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and return the value for the new time
    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}

/// Accelerate-decelerate curve: slow start, fast middle, slow end
fn ease_in_out(t: f64) -> f64 {
    ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn starts_at_from() {
        let driver = ProgressDriver::new(0.2, 0.8);
        assert_close(driver.value(), 0.2);
        assert!(!driver.is_finished());
    }

    #[test]
    fn midpoint_is_halfway() {
        let mut driver = ProgressDriver::with_duration(0.0, 1.0, Duration::from_millis(200));
        assert_close(driver.tick(Duration::from_millis(100)), 0.5);
    }

    #[test]
    fn easing_is_slow_at_the_ends() {
        let mut driver = ProgressDriver::with_duration(0.0, 1.0, Duration::from_millis(100));
        let early = driver.tick(Duration::from_millis(10));
        assert!(early < 0.1);
        assert!(early > 0.0);
    }

    #[test]
    fn finishes_at_target() {
        let mut driver = ProgressDriver::new(1.0, 0.25);
        let mut value = driver.value();
        for _ in 0..30 {
            value = driver.tick(Duration::from_millis(16));
        }
        assert!(driver.is_finished());
        assert_close(value, 0.25);
        assert_close(driver.fraction(), 1.0);
    }

    #[test]
    fn default_duration_matches_settings() {
        let mut driver = ProgressDriver::new(0.0, 1.0);
        driver.tick(settings::animation::PROGRESS_DURATION - Duration::from_millis(1));
        assert!(!driver.is_finished());
        driver.tick(Duration::from_millis(1));
        assert!(driver.is_finished());
    }

    #[test]
    fn zero_duration_jumps() {
        let driver = ProgressDriver::with_duration(0.0, 0.6, Duration::ZERO);
        assert!(driver.is_finished());
        assert_close(driver.value(), 0.6);
    }
}
