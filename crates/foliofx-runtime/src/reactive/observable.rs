#![forbid(unsafe_code)]

//! Observable value wrapper with change notification and version tracking.
//!
//! # Design
//!
//! [`Observable<T>`] wraps a value of type `T` in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). When the value changes (determined by
//! `PartialEq`), all live subscribers are notified in registration order.
//! It is single-threaded on purpose: the theme it carries is written and read
//! on the UI thread only.
//!
//! # Failure Modes
//!
//! - **Subscriber leak**: If `Subscription` guards are stored indefinitely
//!   without being dropped, callbacks accumulate. Dead weak references are
//!   cleaned lazily during `notify()`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info_span};
use web_time::Instant;

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    version: u64,
    /// Subscribers stored as weak references. Dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** inner state.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing mutation.
/// 2. `set(v)` where `v == current` is a no-op.
/// 3. Subscribers are notified in registration order.
/// 4. Dead subscribers (dropped [`Subscription`] guards) are pruned lazily.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable with the given initial value.
    ///
    /// The initial version is 0 and no subscribers are registered.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Set a new value. Returns `true` if it differed from the current value,
    /// in which case the version is bumped and live subscribers are notified.
    ///
    /// Safe to call re-entrantly from within subscriber callbacks.
    pub fn set(&self, value: T) -> bool {
        let changed = self.store(value);
        if changed {
            self.notify();
        }
        changed
    }

    /// Update the value and version like [`set`](Self::set), but leave
    /// notification to a later [`notify`](Self::notify) call. Lets an owner
    /// update several observables before any subscriber runs.
    pub(crate) fn store(&self, value: T) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.value == value {
            return false;
        }
        inner.value = value;
        inner.version += 1;
        true
    }

    /// Subscribe to value changes.
    ///
    /// Returns a [`Subscription`] guard. Dropping the guard unsubscribes
    /// the callback.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Current version number.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers, including dead ones not yet pruned.
    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Notify live subscribers of the current value and prune dead ones.
    pub(crate) fn notify(&self) {
        // Collect live callbacks first so no borrow is held during calls.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect()
        };

        if callbacks.is_empty() {
            return;
        }

        let value = self.inner.borrow().value.clone();
        let started = Instant::now();
        let _span =
            info_span!("foliofx.observable.notify", subscribers = callbacks.len()).entered();

        for cb in &callbacks {
            cb(&value);
        }

        debug!(
            duration_us = started.elapsed().as_micros() as u64,
            subscribers = callbacks.len(),
            "observable propagation"
        );
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the `Subscription` drops the strong `Rc` behind the callback, so
/// the `Weak` in the observable's list fails to upgrade from then on.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
