#![forbid(unsafe_code)]

//! Animation primitives: the [`Animation`] trait and easing curves.
//!
//! Time-based animations (like [`scroll::SmoothScroll`]) implement
//! [`Animation`] and are advanced with `tick(dt)`. Step-based animations
//! (like [`scramble::ScrambleSequence`]) advance one discrete step per tick
//! of a fixed-period clock and do not implement it.

use std::time::Duration;

pub mod presets;
pub mod scramble;
pub mod scroll;

/// An easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = fn(f64) -> f64;

/// A time-driven animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation reached its end state.
    fn is_complete(&self) -> bool;

    /// Current eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f64;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Time that elapsed past completion during the last tick.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out: `2t²` below the midpoint, `-1 + (4 - 2t)t` above.
#[inline]
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic ease-out.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
