#![forbid(unsafe_code)]

//! Animation and theme configuration as data.
//!
//! [`FolioConfig`] gathers every tunable in one struct that can be loaded
//! from TOML or JSON at startup. Missing keys keep their defaults, so an
//! empty file is a valid config.
//!
//! ```toml
//! # foliofx.toml
//! [scramble]
//! total_steps = 40
//! tick_interval_ms = 80
//! seed = 7
//!
//! [scroll]
//! duration_ms = 600
//!
//! [themes.role]
//! background = "light"
//! accent = "dark"
//! logo = "secondary"
//! ```
//!
//! ```rust,ignore
//! let config = FolioConfig::load_toml_file("foliofx.toml")?;
//! let options = config.scramble_options()?;
//! let handle = start_scramble("Developer", options, &config.scramble_timing(), sink)?;
//! ```

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use foliofx_core::animation::presets::hero_min_total_steps;
use foliofx_core::animation::scramble::{DEFAULT_CHARSET, DEFAULT_MAX_NOISE, DEFAULT_TOTAL_STEPS};
use foliofx_core::animation::scroll::DEFAULT_SCROLL_DURATION;
use foliofx_core::{Charset, ScrambleError, ScrambleOptions, ThemeTable};

use crate::navigator::{DEFAULT_FRAME_INTERVAL, ScrollTiming};
use crate::scramble::{DEFAULT_START_DELAY, DEFAULT_TICK_INTERVAL, ScrambleTiming};

// ---------------------------------------------------------------------------
// Top-level FolioConfig
// ---------------------------------------------------------------------------

/// Everything tunable about the page effects.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FolioConfig {
    /// Scramble-reveal parameters.
    pub scramble: ScrambleConfig,
    /// Smooth-scroll parameters.
    pub scroll: ScrollConfig,
    /// Section → theme table.
    pub themes: ThemeTable,
}

impl FolioConfig {
    /// Parse from a TOML string. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Parse from a TOML file on disk. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a JSON string. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Parse from a JSON file on disk. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a TOML file.
    #[cfg(feature = "config")]
    pub fn load_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)?.validated()
    }

    /// Parse and validate a JSON file.
    #[cfg(feature = "config")]
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_file(path)?.validated()
    }

    /// Serialize to pretty JSON.
    #[cfg(feature = "config")]
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Json)
    }

    /// Check every parameter. An empty list means the config is usable.
    ///
    /// `scramble.total_steps` is checked against the hero headings, the
    /// longest text the scramble settings drive.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let min_steps = hero_min_total_steps();
        if self.scramble.total_steps < min_steps {
            errors.push(format!(
                "scramble.total_steps must be >= {min_steps}, got {}",
                self.scramble.total_steps
            ));
        }
        if let Err(e) = Charset::new(&self.scramble.charset) {
            errors.push(format!("scramble.charset: {e}"));
        }
        if self.scramble.tick_interval_ms == 0 {
            errors.push("scramble.tick_interval_ms must be > 0".into());
        }
        if self.scroll.frame_interval_ms == 0 {
            errors.push("scroll.frame_interval_ms must be > 0".into());
        }
        if self.scroll.frame_interval_ms > self.scroll.duration_ms {
            errors.push(format!(
                "scroll.frame_interval_ms ({}) must not exceed scroll.duration_ms ({})",
                self.scroll.frame_interval_ms, self.scroll.duration_ms
            ));
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing, otherwise
    /// [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Per-sequence options for the noise policy.
    pub fn scramble_options(&self) -> Result<ScrambleOptions, ScrambleError> {
        Ok(ScrambleOptions::default()
            .total_steps(self.scramble.total_steps)
            .max_noise(self.scramble.max_noise)
            .charset(Charset::new(&self.scramble.charset)?))
    }

    /// Clock settings for scramble drivers.
    #[must_use]
    pub fn scramble_timing(&self) -> ScrambleTiming {
        ScrambleTiming {
            tick_interval: Duration::from_millis(self.scramble.tick_interval_ms),
            start_delay: Duration::from_millis(self.scramble.start_delay_ms),
            seed: self.scramble.seed,
        }
    }

    /// Timing for the navigator.
    #[must_use]
    pub fn scroll_timing(&self) -> ScrollTiming {
        ScrollTiming {
            duration: Duration::from_millis(self.scroll.duration_ms),
            frame_interval: Duration::from_millis(self.scroll.frame_interval_ms),
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Scramble-reveal parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ScrambleConfig {
    /// Countdown start per sequence.
    pub total_steps: usize,
    /// Cap on noise characters per frame.
    pub max_noise: usize,
    /// Noise alphabet.
    pub charset: String,
    /// Milliseconds between ticks.
    pub tick_interval_ms: u64,
    /// Milliseconds before the first tick.
    pub start_delay_ms: u64,
    /// Fixed RNG seed; OS-seeded when absent.
    #[cfg_attr(feature = "config", serde(skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            total_steps: DEFAULT_TOTAL_STEPS,
            max_noise: DEFAULT_MAX_NOISE,
            charset: DEFAULT_CHARSET.to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            start_delay_ms: DEFAULT_START_DELAY.as_millis() as u64,
            seed: None,
        }
    }
}

/// Smooth-scroll parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ScrollConfig {
    /// Animation length in milliseconds.
    pub duration_ms: u64,
    /// Milliseconds between frames.
    pub frame_interval_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_SCROLL_DURATION.as_millis() as u64,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL.as_millis() as u64,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse or serialization error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Validation(errors) => write!(f, "invalid config: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
