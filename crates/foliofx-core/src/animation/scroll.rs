#![forbid(unsafe_code)]

//! Smooth scroll: eased interpolation from one scroll offset to another.
//!
//! [`SmoothScroll`] is a pure function of elapsed time. A driver samples
//! [`SmoothScroll::position`] once per frame and applies it to the scroll
//! surface until [`Animation::is_complete`] reports true.
//!
//! # Invariants
//!
//! 1. `position()` equals `start` at zero elapsed time.
//! 2. Once `elapsed >= duration`, `position()` equals `target` exactly (no
//!    floating-point drift from `start + distance * 1.0`).
//! 3. For a monotonic easing curve, positions move monotonically from
//!    `start` towards `target`.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns, so the first tick completes.

use std::time::Duration;

use super::{Animation, EasingFn, ease_in_out_quad};

/// Scroll animation length unless configured otherwise.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(1000);

/// An eased scroll from `start` to `target`.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    start: f64,
    target: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl SmoothScroll {
    /// Scroll from `start` to `target` over the default duration with
    /// quadratic ease-in-out.
    #[must_use]
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            start,
            target,
            duration: DEFAULT_SCROLL_DURATION,
            elapsed: Duration::ZERO,
            easing: ease_in_out_quad,
        }
    }

    /// Set the duration (builder pattern). Zero is clamped to 1ns.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = if duration.is_zero() {
            Duration::from_nanos(1)
        } else {
            duration
        };
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start offset.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Destination offset.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Total duration.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Set the elapsed time directly, e.g. from a frame timestamp.
    pub fn seek(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Scroll offset at the current elapsed time.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position_at(self.elapsed)
    }

    /// Scroll offset at an arbitrary elapsed time.
    #[must_use]
    pub fn position_at(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start + (self.target - self.start) * (self.easing)(t)
    }
}

impl Animation for SmoothScroll {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f64 {
        if self.is_complete() {
            return 1.0;
        }
        (self.easing)(self.elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}
