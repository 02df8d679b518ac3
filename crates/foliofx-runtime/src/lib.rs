#![forbid(unsafe_code)]

//! foliofx runtime
//!
//! Drives the pure state machines of `foliofx-core` against a real clock and
//! a host page.
//!
//! # Key Components
//!
//! - [`Ticker`] - Fixed-period timer thread with a cancel-on-drop handle
//! - [`start_scramble`] / [`start_scramble_group`] - Timer-driven scramble-reveal
//! - [`SectionController`] - Owns the published page theme
//! - [`ScrollNavigator`] - Smooth scroll to a region by id
//! - [`Observable`] - Version-tracked value with change notification
//! - [`FolioConfig`] - Every tunable, loadable from TOML or JSON
//!
//! # Threading
//!
//! Scramble and scroll drivers each run on their own timer thread; their
//! sinks and surfaces must be `Send`. The section controller and its
//! observables are single-threaded and live on the host's UI thread.

pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod navigator;
pub mod reactive;
pub mod scramble;
pub mod sections;
pub mod ticker;

pub use config::{ConfigError, FolioConfig, ScrambleConfig, ScrollConfig};
pub use navigator::{ScrollHandle, ScrollNavigator, ScrollSurface, ScrollTiming};
pub use reactive::{Observable, Subscription};
pub use scramble::{ScrambleHandle, ScrambleTiming, start_scramble, start_scramble_group};
pub use sections::{SectionController, ThemeReader};
pub use ticker::{DriverError, Ticker, TickerHandle};
