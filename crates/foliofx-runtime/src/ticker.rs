#![forbid(unsafe_code)]

//! Fixed-period timer threads with owned cancellation handles.
//!
//! A [`Ticker`] runs a callback on a dedicated thread every `interval`,
//! optionally after a start delay, until the callback returns
//! [`ControlFlow::Break`] or the returned [`TickerHandle`] is cancelled.
//!
//! # Guarantees
//!
//! - Once [`TickerHandle::cancel`] returns, the callback is never invoked
//!   again. Cancel joins the thread; when called from inside the callback it
//!   only raises the stop flag, and the loop exits as soon as the callback
//!   returns.
//! - Dropping the handle cancels. Use [`TickerHandle::detach`] to let the
//!   timer run to completion unattended.
//! - Ticks are scheduled against deadlines (`start + n * interval`), so a
//!   slow callback does not accumulate drift.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use foliofx_core::ScrambleError;
use tracing::{debug, warn};
use web_time::Instant;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised when starting a driver.
#[derive(Debug)]
pub enum DriverError {
    /// The timer thread could not be spawned.
    Spawn(std::io::Error),
    /// The scramble targets or options were invalid.
    Scramble(ScrambleError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to spawn timer thread: {e}"),
            Self::Scramble(e) => write!(f, "invalid scramble: {e}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::Scramble(e) => Some(e),
        }
    }
}

impl From<ScrambleError> for DriverError {
    fn from(e: ScrambleError) -> Self {
        Self::Scramble(e)
    }
}

// ---------------------------------------------------------------------------
// Stop flag
// ---------------------------------------------------------------------------

#[derive(Default)]
struct StopFlag {
    stopped: Mutex<bool>,
    cvar: Condvar,
}

impl StopFlag {
    fn raise(&self) {
        let mut stopped = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        *stopped = true;
        self.cvar.notify_all();
    }

    fn is_raised(&self) -> bool {
        *self.stopped.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sleep up to `duration`; returns `true` if the flag was raised.
    fn sleep(&self, duration: Duration) -> bool {
        let guard = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        if duration.is_zero() {
            return *guard;
        }
        let (guard, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |stopped| !*stopped)
            .unwrap_or_else(|e| e.into_inner());
        *guard
    }
}

// ---------------------------------------------------------------------------
// Ticker
// ---------------------------------------------------------------------------

/// Builder for a fixed-period timer thread.
#[derive(Debug, Clone)]
pub struct Ticker {
    name: String,
    interval: Duration,
    start_delay: Duration,
}

impl Ticker {
    /// A ticker firing every `interval`, starting one interval after spawn.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            name: "foliofx-ticker".to_string(),
            interval,
            start_delay: Duration::ZERO,
        }
    }

    /// Extra wait before the first interval starts (builder pattern).
    #[must_use]
    pub fn start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Thread name, for debuggers and logs (builder pattern).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Start the timer thread.
    pub fn spawn<F>(self, mut on_tick: F) -> Result<TickerHandle, DriverError>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let stop = Arc::new(StopFlag::default());
        let worker_stop = Arc::clone(&stop);
        let Self {
            name,
            interval,
            start_delay,
        } = self;

        let thread = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                if worker_stop.sleep(start_delay) {
                    return;
                }
                let mut deadline = Instant::now() + interval;
                let mut ticks: u64 = 0;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    if worker_stop.sleep(wait) {
                        debug!(ticker = %name, ticks, "ticker cancelled");
                        return;
                    }
                    ticks += 1;
                    if on_tick().is_break() {
                        debug!(ticker = %name, ticks, "ticker finished");
                        return;
                    }
                    deadline += interval;
                }
            })
            .map_err(DriverError::Spawn)?;

        Ok(TickerHandle {
            stop,
            thread: Some(thread),
        })
    }
}

/// Owned handle to a running [`Ticker`]. Cancels on drop.
pub struct TickerHandle {
    stop: Arc<StopFlag>,
    thread: Option<JoinHandle<()>>,
}

impl fmt::Debug for TickerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickerHandle")
            .field("cancelled", &self.stop.is_raised())
            .field("finished", &self.is_finished())
            .finish()
    }
}

impl TickerHandle {
    /// Stop the timer. No tick runs after this returns. Idempotent.
    pub fn cancel(&mut self) {
        self.stop.raise();
        let Some(thread) = self.thread.take() else {
            return;
        };
        if thread.thread().id() == thread::current().id() {
            // Called from inside the callback; the loop exits when it returns.
            return;
        }
        if thread.join().is_err() {
            warn!("ticker callback panicked");
        }
    }

    /// Whether the timer thread has exited (finished, cancelled, or panicked).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Block until the callback ends the timer on its own.
    pub fn wait(mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("ticker callback panicked");
            }
        }
    }

    /// Let the timer run to completion without holding the handle.
    pub fn detach(mut self) {
        self.thread.take();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.cancel();
        }
    }
}
