#![forbid(unsafe_code)]

//! Reactive values shared between a single owner and many readers.

pub mod observable;

pub use observable::{Observable, Subscription};
