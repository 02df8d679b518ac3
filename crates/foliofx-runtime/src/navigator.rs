#![forbid(unsafe_code)]

//! Smooth-scroll navigation to a labeled region.
//!
//! [`ScrollNavigator::scroll_to`] looks the region up through a
//! [`RegionProvider`], then drives a [`SmoothScroll`] on a frame
//! [`Ticker`], writing the eased position to the [`ScrollSurface`] on every
//! frame until the duration has elapsed. The last write is the destination
//! itself.
//!
//! Navigations are not serialized against each other: starting a second one
//! while the first is in flight makes both write to the surface until the
//! older one ends. Cancel the previous [`ScrollHandle`] first if that
//! matters.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use foliofx_core::animation::scroll::DEFAULT_SCROLL_DURATION;
use foliofx_core::{RegionProvider, SectionId, SmoothScroll};
use tracing::debug;
use web_time::Instant;

use crate::ticker::{DriverError, Ticker, TickerHandle};

/// Frame period unless configured otherwise (~60 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The scrollable viewport.
pub trait ScrollSurface: Send + Sync {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Move the viewport to `y`.
    fn set_scroll_y(&self, y: f64);
}

/// Timing for smooth scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTiming {
    /// Total animation length.
    pub duration: Duration,
    /// Period between frames.
    pub frame_interval: Duration,
}

impl Default for ScrollTiming {
    fn default() -> Self {
        Self {
            duration: DEFAULT_SCROLL_DURATION,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

/// Owned handle to an in-flight smooth scroll. Cancels on drop.
#[derive(Debug)]
pub struct ScrollHandle {
    ticker: TickerHandle,
    target: f64,
}

impl ScrollHandle {
    /// Destination offset.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Stop scrolling where it is. No frame is applied after this returns.
    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }

    /// Whether the animation has ended, by completion or cancellation.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ticker.is_finished()
    }

    /// Block until the destination is reached.
    pub fn wait(self) {
        self.ticker.wait();
    }

    /// Let the scroll finish without holding the handle.
    pub fn detach(self) {
        self.ticker.detach();
    }
}

/// Scrolls a surface to regions by id.
pub struct ScrollNavigator<S: ScrollSurface + 'static> {
    surface: Arc<S>,
    timing: ScrollTiming,
}

impl<S: ScrollSurface + 'static> std::fmt::Debug for ScrollNavigator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollNavigator")
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

impl<S: ScrollSurface + 'static> ScrollNavigator<S> {
    /// Navigator with default timing.
    #[must_use]
    pub fn new(surface: Arc<S>) -> Self {
        Self {
            surface,
            timing: ScrollTiming::default(),
        }
    }

    /// Set the timing (builder pattern).
    #[must_use]
    pub fn timing(mut self, timing: ScrollTiming) -> Self {
        self.timing = timing;
        self
    }

    /// The surface being scrolled.
    #[must_use]
    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Move to `y` immediately, without animation.
    pub fn jump_to(&self, y: f64) {
        self.surface.set_scroll_y(y);
    }

    /// Smoothly scroll so region `id` sits at the top of the viewport.
    ///
    /// Returns `Ok(None)` without touching the surface when the provider has
    /// no such region.
    pub fn scroll_to<P: RegionProvider + ?Sized>(
        &self,
        provider: &P,
        id: SectionId,
    ) -> Result<Option<ScrollHandle>, DriverError> {
        let Some(region) = provider.region(id) else {
            debug!(section = id.as_str(), "scroll target not found");
            return Ok(None);
        };
        let target = self.surface.scroll_y() + region.bounds.top;
        self.scroll_to_offset(target).map(Some)
    }

    /// Smoothly scroll to an absolute offset.
    pub fn scroll_to_offset(&self, target: f64) -> Result<ScrollHandle, DriverError> {
        let start = self.surface.scroll_y();
        let scroll = SmoothScroll::new(start, target).duration(self.timing.duration);
        let surface = Arc::clone(&self.surface);
        debug!(
            start,
            target,
            duration_ms = self.timing.duration.as_millis() as u64,
            "starting smooth scroll"
        );

        let started = Instant::now();
        let ticker = Ticker::new(self.timing.frame_interval)
            .name("foliofx-scroll")
            .spawn(move || {
                let elapsed = started.elapsed();
                surface.set_scroll_y(scroll.position_at(elapsed));
                if elapsed >= scroll.total_duration() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })?;

        Ok(ScrollHandle { ticker, target })
    }
}
