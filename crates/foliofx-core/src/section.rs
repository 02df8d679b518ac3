#![forbid(unsafe_code)]

//! Section themes and the viewport-center predicate.
//!
//! A page is split into labeled regions. Whichever region straddles the
//! vertical midpoint of the viewport decides the [`SectionTheme`] used by the
//! navigation bar and the page background.
//!
//! # Invariants
//!
//! 1. A region is active iff `top <= H/2 <= bottom`, `H` the viewport height.
//! 2. Regions are scanned in document order and the **last** match wins.
//! 3. No match (including zero regions) yields the fallback theme exactly.
//! 4. The result depends only on the current geometry; nothing is carried
//!    over between evaluations.
//!
//! The last-match-wins rule follows from overwriting the result on every
//! match instead of stopping at the first. Overlapping regions are rare in
//! practice, but visual behavior depends on the rule, so it is kept; switch
//! to first-match only together with the page layout.

use std::fmt;

use crate::geometry::Region;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// The closed set of labeled page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SectionId {
    Hero,
    About,
    Role,
    Services,
    Experience,
    Projects,
    /// A labeled region without its own theme (contact, footer, …).
    Other,
}

impl SectionId {
    /// Every themed section, in document order.
    pub const THEMED: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Role,
        Self::Services,
        Self::Experience,
        Self::Projects,
    ];

    /// Map an element id to a section. Unknown ids map to [`SectionId::Other`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "hero" => Self::Hero,
            "about" => Self::About,
            "role" => Self::Role,
            "services" => Self::Services,
            "experience" => Self::Experience,
            "projects" => Self::Projects,
            _ => Self::Other,
        }
    }

    /// The element id of this section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Role => "role",
            Self::Services => "services",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Page background tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Background {
    Dark,
    Light,
}

/// Navigation text tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Accent {
    Dark,
    Light,
}

/// Which logo asset to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogoVariant {
    Primary,
    Secondary,
}

/// The {background, accent, logo} triple for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionTheme {
    pub background: Background,
    pub accent: Accent,
    pub logo: LogoVariant,
}

impl SectionTheme {
    /// Create a theme.
    #[must_use]
    pub const fn new(background: Background, accent: Accent, logo: LogoVariant) -> Self {
        Self {
            background,
            accent,
            logo,
        }
    }

    /// Dark page, light navigation text, primary logo.
    pub const DARK: Self = Self::new(Background::Dark, Accent::Light, LogoVariant::Primary);
    /// Light page, light navigation text, primary logo.
    pub const LIGHT: Self = Self::new(Background::Light, Accent::Light, LogoVariant::Primary);
    /// Dark page, dark navigation text, secondary logo.
    pub const INVERTED: Self = Self::new(Background::Dark, Accent::Dark, LogoVariant::Secondary);
}

impl Default for SectionTheme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Static mapping from section to theme. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeTable {
    pub hero: SectionTheme,
    pub about: SectionTheme,
    pub role: SectionTheme,
    pub services: SectionTheme,
    pub experience: SectionTheme,
    pub projects: SectionTheme,
    /// Applied when no region is active and for [`SectionId::Other`].
    pub fallback: SectionTheme,
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self {
            hero: SectionTheme::DARK,
            about: SectionTheme::LIGHT,
            role: SectionTheme::INVERTED,
            services: SectionTheme::LIGHT,
            experience: SectionTheme::INVERTED,
            projects: SectionTheme::LIGHT,
            fallback: SectionTheme::DARK,
        }
    }
}

impl ThemeTable {
    /// A table with every entry set to `fallback`, the builder's starting
    /// point for custom tables.
    #[must_use]
    pub const fn uniform(fallback: SectionTheme) -> Self {
        Self {
            hero: fallback,
            about: fallback,
            role: fallback,
            services: fallback,
            experience: fallback,
            projects: fallback,
            fallback,
        }
    }

    /// Override the theme of one section (builder pattern).
    ///
    /// Setting [`SectionId::Other`] overrides the fallback.
    #[must_use]
    pub fn with(mut self, id: SectionId, theme: SectionTheme) -> Self {
        match id {
            SectionId::Hero => self.hero = theme,
            SectionId::About => self.about = theme,
            SectionId::Role => self.role = theme,
            SectionId::Services => self.services = theme,
            SectionId::Experience => self.experience = theme,
            SectionId::Projects => self.projects = theme,
            SectionId::Other => self.fallback = theme,
        }
        self
    }

    /// Theme for a section.
    #[must_use]
    pub const fn get(&self, id: SectionId) -> SectionTheme {
        match id {
            SectionId::Hero => self.hero,
            SectionId::About => self.about,
            SectionId::Role => self.role,
            SectionId::Services => self.services,
            SectionId::Experience => self.experience,
            SectionId::Projects => self.projects,
            SectionId::Other => self.fallback,
        }
    }

    /// Theme for an optional active section; `None` yields the fallback.
    #[must_use]
    pub const fn resolve(&self, active: Option<SectionId>) -> SectionTheme {
        match active {
            Some(id) => self.get(id),
            None => self.fallback,
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Source of region geometry, abstracting the page layout.
pub trait RegionProvider {
    /// Current viewport height.
    fn viewport_height(&self) -> f64;

    /// Every labeled region, in document order, relative to the viewport.
    fn regions(&self) -> Vec<Region>;

    /// The first region labeled `id`, if any.
    fn region(&self, id: SectionId) -> Option<Region> {
        self.regions().into_iter().find(|r| r.id == id)
    }
}

impl<P: RegionProvider + ?Sized> RegionProvider for &P {
    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn regions(&self) -> Vec<Region> {
        (**self).regions()
    }

    fn region(&self, id: SectionId) -> Option<Region> {
        (**self).region(id)
    }
}

/// Which region straddles the viewport midpoint. Last match wins.
#[must_use]
pub fn detect_active(regions: &[Region], viewport_height: f64) -> Option<SectionId> {
    let midpoint = viewport_height / 2.0;
    let mut active = None;
    for region in regions {
        if region.bounds.straddles(midpoint) {
            active = Some(region.id);
        }
    }
    active
}

/// The theme to publish for the given geometry.
#[must_use]
pub fn observe_sections(
    regions: &[Region],
    viewport_height: f64,
    table: &ThemeTable,
) -> SectionTheme {
    table.resolve(detect_active(regions, viewport_height))
}
