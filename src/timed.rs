//! Wrap a unit of work into a callable that measures itself
//!
//! Each constructor takes the work as a zero-argument closure (bind any arguments
//! into it beforehand) and returns a [`Timed`] value. Every call to
//! [`Timed::invoke`] runs a fresh measurement and returns it.
//!
//! # Example
//! ```
//! use runtimer::timed::min_runtime;
//!
//! let input: Vec<u64> = (0..1_000).collect();
//! let mut timed = min_runtime(100, 10, || input.iter().sum::<u64>()).unwrap();
//!
//! let fastest = timed.invoke();
//! println!("{fastest}");
//! ```

use crate::aggregation::Aggregation;
use crate::clock::{Clock, MonotonicClock};
use crate::config::TrialConfig;
use crate::error::Result;
use crate::runner::{Measurement, TrialRunner};

/// A unit of work bound to a measurement procedure
#[derive(Debug, Clone)]
pub struct Timed<F, C = MonotonicClock> {
    work: F,
    runner: TrialRunner<C>,
}

impl<F> Timed<F, MonotonicClock> {
    /// Wrap `work` with an arbitrary aggregation strategy
    pub fn new(aggregation: Aggregation, config: TrialConfig, work: F) -> Self {
        Self {
            work,
            runner: TrialRunner::new(aggregation, config),
        }
    }
}

impl<F, C: Clock> Timed<F, C> {
    /// Swap the time source, keeping the work and configuration
    pub fn with_clock<D: Clock>(self, clock: D) -> Timed<F, D> {
        Timed {
            work: self.work,
            runner: TrialRunner::with_clock(self.runner.aggregation(), self.runner.config(), clock),
        }
    }

    pub fn runner(&self) -> &TrialRunner<C> {
        &self.runner
    }

    /// Give back the wrapped work
    pub fn into_inner(self) -> F {
        self.work
    }

    /// Run one measurement of the wrapped work
    pub fn invoke<R>(&mut self) -> Measurement
    where
        F: FnMut() -> R,
    {
        self.runner.measure(&mut self.work)
    }

    /// Run one measurement of fallible work, stopping at the first error
    pub fn try_invoke<T, E>(&mut self) -> std::result::Result<Measurement, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
    {
        self.runner.try_measure(&mut self.work)
    }
}

/// Elapsed time of invoking `work` `repetitions` times
pub fn total_runtime<F>(repetitions: u32, work: F) -> Result<Timed<F>> {
    Ok(Timed::new(
        Aggregation::Total,
        TrialConfig::new(repetitions)?,
        work,
    ))
}

/// Elapsed time of invoking `work` `repetitions` times, divided by `repetitions`
pub fn average_runtime<F>(repetitions: u32, work: F) -> Result<Timed<F>> {
    Ok(Timed::new(
        Aggregation::Average,
        TrialConfig::new(repetitions)?,
        work,
    ))
}

/// Fastest of `trials` timings of `repetitions` consecutive invocations
pub fn min_runtime<F>(repetitions: u32, trials: u32, work: F) -> Result<Timed<F>> {
    Ok(Timed::new(
        Aggregation::Min,
        TrialConfig::new(repetitions)?.with_trials(trials)?,
        work,
    ))
}

/// Slowest of `trials` timings of `repetitions` consecutive invocations
pub fn max_runtime<F>(repetitions: u32, trials: u32, work: F) -> Result<Timed<F>> {
    Ok(Timed::new(
        Aggregation::Max,
        TrialConfig::new(repetitions)?.with_trials(trials)?,
        work,
    ))
}
