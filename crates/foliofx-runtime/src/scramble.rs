#![forbid(unsafe_code)]

//! Timer-driven scramble-reveal.
//!
//! [`start_scramble_group`] moves a [`ScrambleGroup`] onto a [`Ticker`]
//! thread. Every tick advances all sequences once and hands their frames to
//! the sink; the timer stops itself after the tick on which the last
//! sequence emits its final text. The returned [`ScrambleHandle`] owns the
//! timer: cancelling (or dropping) it guarantees the sink is not called
//! again.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use foliofx_core::{ScrambleFrame, ScrambleGroup, ScrambleOptions, ScrambleSequence};
use tracing::debug;

use crate::ticker::{DriverError, Ticker, TickerHandle};

/// Tick period unless configured otherwise.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Wait before the first tick unless configured otherwise.
pub const DEFAULT_START_DELAY: Duration = Duration::from_millis(200);

/// Clock settings for a scramble run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleTiming {
    /// Period between ticks.
    pub tick_interval: Duration,
    /// Extra wait before the first tick.
    pub start_delay: Duration,
    /// Seed for reproducible noise; OS-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for ScrambleTiming {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            start_delay: DEFAULT_START_DELAY,
            seed: None,
        }
    }
}

impl ScrambleTiming {
    /// Build a group over `sequences` with this timing's seed.
    #[must_use]
    pub fn group(&self, sequences: Vec<ScrambleSequence>) -> ScrambleGroup {
        match self.seed {
            Some(seed) => ScrambleGroup::with_seed(sequences, seed),
            None => ScrambleGroup::new(sequences),
        }
    }
}

/// Owned handle to a running scramble. Cancels on drop.
#[derive(Debug)]
pub struct ScrambleHandle {
    ticker: TickerHandle,
    done: Arc<AtomicBool>,
}

impl ScrambleHandle {
    /// Stop the animation. The sink is never called after this returns.
    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }

    /// Whether every sequence emitted its final text.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Whether the timer stopped, by completion or cancellation.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ticker.is_finished()
    }

    /// Block until the animation completes.
    pub fn wait(self) {
        self.ticker.wait();
    }

    /// Let the animation finish without holding the handle.
    pub fn detach(self) {
        self.ticker.detach();
    }
}

/// Scramble a single `target`; the sink receives one frame per tick.
pub fn start_scramble<S>(
    target: &str,
    options: ScrambleOptions,
    timing: &ScrambleTiming,
    mut sink: S,
) -> Result<ScrambleHandle, DriverError>
where
    S: FnMut(&ScrambleFrame) + Send + 'static,
{
    let sequence = ScrambleSequence::new(target, options)?;
    start_scramble_group(timing.group(vec![sequence]), timing, move |frames| {
        if let Some(frame) = frames.first() {
            sink(frame);
        }
    })
}

/// Scramble several sequences on one shared clock; the sink receives one
/// frame per sequence per tick, in group order.
pub fn start_scramble_group<S>(
    mut group: ScrambleGroup,
    timing: &ScrambleTiming,
    mut sink: S,
) -> Result<ScrambleHandle, DriverError>
where
    S: FnMut(&[ScrambleFrame]) + Send + 'static,
{
    debug!(
        sequences = group.len(),
        ticks = group.remaining_ticks(),
        interval_ms = timing.tick_interval.as_millis() as u64,
        "starting scramble"
    );
    let done = Arc::new(AtomicBool::new(false));
    let worker_done = Arc::clone(&done);

    let ticker = Ticker::new(timing.tick_interval)
        .start_delay(timing.start_delay)
        .name("foliofx-scramble")
        .spawn(move || {
            let frames = group.tick();
            sink(&frames);
            if group.is_done() {
                worker_done.store(true, Ordering::Release);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;

    Ok(ScrambleHandle { ticker, done })
}
