#![forbid(unsafe_code)]

//! Geometric primitives for viewport regions.

use crate::section::SectionId;

/// Vertical extent of a region, relative to the top of the viewport.
///
/// Offsets are in CSS pixels and may be negative (scrolled above the
/// viewport) or exceed the viewport height (below it).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionBounds {
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl RegionBounds {
    /// Create bounds from top and bottom edges.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Create bounds from a top edge and a height.
    #[inline]
    #[must_use]
    pub fn from_height(top: f64, height: f64) -> Self {
        Self::new(top, top + height)
    }

    /// Height of the region.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the horizontal line at `y` lies within `[top, bottom]`
    /// (both edges inclusive).
    #[inline]
    #[must_use]
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }

    /// The same bounds shifted by `-dy`, i.e. after scrolling down by `dy`.
    #[inline]
    #[must_use]
    pub fn scrolled_by(&self, dy: f64) -> Self {
        Self::new(self.top - dy, self.bottom - dy)
    }
}

/// A labeled region of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Which section this region represents.
    pub id: SectionId,
    /// Where it currently sits relative to the viewport.
    pub bounds: RegionBounds,
}

impl Region {
    /// Create a region.
    #[inline]
    #[must_use]
    pub const fn new(id: SectionId, top: f64, bottom: f64) -> Self {
        Self {
            id,
            bounds: RegionBounds::new(top, bottom),
        }
    }
}
