//! Monotonic time sources for the trial runner
//!
//! The runner only ever asks a clock for "the current timestamp" and subtracts two
//! readings, so a clock is anything that can hand out monotonically increasing
//! offsets from some fixed origin.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A monotonically increasing time source
///
/// Readings are offsets from an arbitrary origin; only the difference between two
/// readings taken from the same clock is meaningful.
pub trait Clock {
    /// Read the current timestamp
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// High-resolution wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of creation
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that replays a fixed sequence of readings
///
/// A testing aid for asserting exact measurements; real measurements use
/// [`MonotonicClock`].
///
/// Once the script runs out the clock stands still at its last reading, so any
/// further interval measures as zero.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use runtimer::clock::{Clock, ScriptedClock};
///
/// let clock = ScriptedClock::from_trials(&[Duration::from_millis(5)]);
/// let start = clock.now();
/// let end = clock.now();
/// assert_eq!(end - start, Duration::from_millis(5));
/// ```
#[derive(Debug, Default)]
pub struct ScriptedClock {
    readings: RefCell<VecDeque<Duration>>,
    last: Cell<Duration>,
    reads: Cell<usize>,
}

impl ScriptedClock {
    /// Replay the given readings in order
    pub fn from_readings(readings: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            readings: RefCell::new(readings.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Build a script in which consecutive start/end pairs are `durations` apart
    ///
    /// Trial `i` starts where trial `i - 1` ended, so the readings are
    /// `0, d0, d0, d0 + d1, ...`.
    pub fn from_trials(durations: &[Duration]) -> Self {
        let mut readings = Vec::with_capacity(durations.len() * 2);
        let mut at = Duration::ZERO;
        for duration in durations {
            readings.push(at);
            at += *duration;
            readings.push(at);
        }
        Self::from_readings(readings)
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Readings left in the script
    pub fn remaining(&self) -> usize {
        self.readings.borrow().len()
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> Duration {
        self.reads.set(self.reads.get() + 1);
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}
