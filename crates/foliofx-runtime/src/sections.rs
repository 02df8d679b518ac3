#![forbid(unsafe_code)]

//! The section controller: sole owner of the published page theme.
//!
//! The host calls [`SectionController::observe`] on mount and on every
//! scroll or resize event. Each call recomputes the active section from
//! scratch (no debounce, no memory of the previous result) and publishes the
//! matching theme. Presentation components read the theme through
//! [`ThemeReader`] handles, which cannot write it.

use foliofx_core::{Region, RegionProvider, SectionId, SectionTheme, ThemeTable, detect_active};
use tracing::debug;

use crate::reactive::{Observable, Subscription};

/// Owns the active section and the theme derived from it.
#[derive(Debug)]
pub struct SectionController {
    table: ThemeTable,
    active: Observable<Option<SectionId>>,
    theme: Observable<SectionTheme>,
}

impl Default for SectionController {
    fn default() -> Self {
        Self::new(ThemeTable::default())
    }
}

impl SectionController {
    /// Start with no active section and the table's fallback theme.
    #[must_use]
    pub fn new(table: ThemeTable) -> Self {
        Self {
            table,
            active: Observable::new(None),
            theme: Observable::new(table.fallback),
        }
    }

    /// The section → theme table.
    #[must_use]
    pub fn table(&self) -> &ThemeTable {
        &self.table
    }

    /// Recompute from the provider's current geometry and publish.
    pub fn observe<P: RegionProvider + ?Sized>(&self, provider: &P) -> SectionTheme {
        self.observe_regions(&provider.regions(), provider.viewport_height())
    }

    /// Recompute from explicit geometry and publish.
    ///
    /// Both values are stored before any subscriber runs, so a callback on
    /// either one reads the new section together with its theme.
    pub fn observe_regions(&self, regions: &[Region], viewport_height: f64) -> SectionTheme {
        let active = detect_active(regions, viewport_height);
        let theme = self.table.resolve(active);
        let active_changed = self.active.store(active);
        let theme_changed = self.theme.store(theme);

        if active_changed {
            debug!(
                section = active.map_or("fallback", SectionId::as_str),
                regions = regions.len(),
                "active section changed"
            );
        }
        if theme_changed {
            self.theme.notify();
        }
        if active_changed {
            self.active.notify();
        }
        theme
    }

    /// The published theme.
    #[must_use]
    pub fn theme(&self) -> SectionTheme {
        self.theme.get()
    }

    /// The active section; `None` while the fallback applies.
    #[must_use]
    pub fn active(&self) -> Option<SectionId> {
        self.active.get()
    }

    /// Call `callback` whenever the published theme changes.
    pub fn subscribe(&self, callback: impl Fn(&SectionTheme) + 'static) -> Subscription {
        self.theme.subscribe(callback)
    }

    /// Call `callback` whenever the active section changes.
    pub fn subscribe_active(
        &self,
        callback: impl Fn(&Option<SectionId>) + 'static,
    ) -> Subscription {
        self.active.subscribe(callback)
    }

    /// A read-only handle to the published theme.
    #[must_use]
    pub fn reader(&self) -> ThemeReader {
        ThemeReader {
            theme: self.theme.clone(),
        }
    }
}

/// Read-only view of the published theme, for presentation components.
#[derive(Debug, Clone)]
pub struct ThemeReader {
    theme: Observable<SectionTheme>,
}

impl ThemeReader {
    /// Current theme snapshot.
    #[must_use]
    pub fn get(&self) -> SectionTheme {
        self.theme.get()
    }

    /// Bumped on every change; useful for dirty checks in render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.theme.version()
    }

    /// Call `callback` whenever the theme changes.
    pub fn subscribe(&self, callback: impl Fn(&SectionTheme) + 'static) -> Subscription {
        self.theme.subscribe(callback)
    }
}
