#![forbid(unsafe_code)]

//! Core: pure animation and section-detection state machines.
//!
//! # Role in foliofx
//! `foliofx-core` holds everything that can be computed without a clock or a
//! thread. Every type here is advanced explicitly by the caller, which makes
//! the behavior reproducible in tests with synthetic geometry and seeded
//! noise.
//!
//! # Primary responsibilities
//! - **Scramble**: noise-to-text reveal sequences and groups sharing a clock.
//! - **Smooth scroll**: eased interpolation between two scroll offsets.
//! - **Sections**: region geometry, the centering predicate, and the static
//!   section → theme table.
//!
//! # How it fits in the system
//! `foliofx-runtime` drives these state machines with timer threads and
//! publishes the active theme through an observable value.

pub mod animation;
pub mod geometry;
pub mod section;

pub use animation::scramble::{
    Charset, RevealPolicy, ScrambleError, ScrambleFrame, ScrambleGroup, ScrambleOptions,
    ScramblePhase, ScrambleSequence,
};
pub use animation::scroll::SmoothScroll;
pub use animation::{Animation, EasingFn, ease_in_out_quad};
pub use geometry::{Region, RegionBounds};
pub use section::{
    Accent, Background, LogoVariant, RegionProvider, SectionId, SectionTheme, ThemeTable,
    detect_active, observe_sections,
};
