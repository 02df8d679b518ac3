#![forbid(unsafe_code)]

//! foliofx public facade.
//!
//! Re-exports the pieces a page host needs and adds a top-level [`Error`].
//! The usual wiring:
//!
//! ```rust,ignore
//! use foliofx::prelude::*;
//!
//! let config = FolioConfig::load_toml_file("foliofx.toml")?;
//! let hero = foliofx::start_hero_titles(&config, |frames| render_titles(frames))?;
//!
//! let sections = SectionController::new(config.themes);
//! let theme = sections.observe(&page); // on mount, scroll and resize
//!
//! let nav = ScrollNavigator::new(surface).timing(config.scroll_timing());
//! nav.jump_to(0.0);
//! let scroll = nav.scroll_to(&page, SectionId::Services)?;
//! ```

use std::fmt;

use foliofx_core::ScrambleFrame;
use foliofx_core::animation::presets;

// --- Re-exports -----------------------------------------------------------

pub use foliofx_core::animation::presets::{
    HERO_ROLE, HERO_SUBTITLE, HERO_TITLE, hero_min_total_steps, hero_titles,
};
pub use foliofx_core::{
    Accent, Animation, Background, Charset, LogoVariant, Region, RegionBounds, RegionProvider,
    RevealPolicy, ScrambleError, ScrambleFrame as Frame, ScrambleGroup, ScrambleOptions,
    ScramblePhase, ScrambleSequence, SectionId, SectionTheme, SmoothScroll, ThemeTable,
    detect_active, ease_in_out_quad, observe_sections,
};
pub use foliofx_runtime::{
    ConfigError, DriverError, FolioConfig, Observable, ScrambleHandle, ScrambleTiming,
    ScrollHandle, ScrollNavigator, ScrollSurface, ScrollTiming, SectionController, Subscription,
    ThemeReader, start_scramble, start_scramble_group,
};

#[cfg(feature = "logging")]
pub use foliofx_runtime::logging;

pub use foliofx_core as core;
pub use foliofx_runtime as runtime;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for foliofx hosts.
#[derive(Debug)]
pub enum Error {
    /// Invalid scramble target or options.
    Scramble(ScrambleError),
    /// A driver could not be started.
    Driver(DriverError),
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scramble(err) => write!(f, "{err}"),
            Self::Driver(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scramble(err) => Some(err),
            Self::Driver(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ScrambleError> for Error {
    fn from(err: ScrambleError) -> Self {
        Self::Scramble(err)
    }
}

impl From<DriverError> for Error {
    fn from(err: DriverError) -> Self {
        Self::Driver(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for foliofx APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Hero intro -----------------------------------------------------------

/// Start the three hero headings on one clock, using `config` for options
/// and timing. The sink receives the three frames of every tick.
pub fn start_hero_titles<S>(config: &FolioConfig, sink: S) -> Result<ScrambleHandle>
where
    S: FnMut(&[ScrambleFrame]) + Send + 'static,
{
    let options = config.scramble_options()?;
    let timing = config.scramble_timing();
    let group = timing.group(presets::hero_titles(&options)?);
    Ok(start_scramble_group(group, &timing, sink)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, FolioConfig, Frame, RegionProvider, Result, ScrambleHandle, ScrambleOptions,
        ScrollHandle, ScrollNavigator, ScrollSurface, SectionController, SectionId, SectionTheme,
        ThemeReader, start_hero_titles, start_scramble,
    };

    pub use crate::{core, runtime};
}
