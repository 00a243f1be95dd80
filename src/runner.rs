//! The timed-trial runner
//!
//! A measurement is `m` trials run back to back. Each trial reads the clock, invokes
//! the work `n` times, reads the clock again and folds the elapsed interval into the
//! aggregate. Total and average always run exactly one trial.

use std::convert::Infallible;
use std::fmt;
use std::hint::black_box;
use std::time::Duration;

use crate::aggregation::Aggregation;
use crate::clock::{Clock, MonotonicClock};
use crate::config::TrialConfig;

/// Result of one measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Strategy that produced `elapsed`
    pub aggregation: Aggregation,
    /// Invocations per trial (`n`)
    pub repetitions: u32,
    /// Trials actually timed
    pub trials: u32,
    /// Folded trial duration: the single trial for total and average, the
    /// fastest or slowest trial for min and max
    pub elapsed: Duration,
}

impl Measurement {
    /// The reported value in seconds
    ///
    /// Average divides `elapsed` by the repetition count in floating point, so
    /// per-call times below one nanosecond are not lost.
    pub fn as_secs_f64(&self) -> f64 {
        self.aggregation.seconds(self.elapsed, self.repetitions)
    }

    /// Total number of times the work ran
    pub fn invocations(&self) -> u64 {
        u64::from(self.repetitions) * u64::from(self.trials)
    }
}

/// Plain seconds, e.g. `0.0123`
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_secs_f64())
    }
}

/// Runs timed trials of a unit of work against a clock
///
/// # Example
/// ```
/// use runtimer::{Aggregation, TrialConfig, TrialRunner};
///
/// let config = TrialConfig::new(10).unwrap().with_trials(3).unwrap();
/// let runner = TrialRunner::new(Aggregation::Min, config);
///
/// let mut calls = 0;
/// let measurement = runner.measure(|| calls += 1);
/// assert_eq!(calls, 30);
/// assert_eq!(measurement.trials, 3);
/// ```
#[derive(Debug, Clone)]
pub struct TrialRunner<C = MonotonicClock> {
    aggregation: Aggregation,
    config: TrialConfig,
    clock: C,
}

impl TrialRunner<MonotonicClock> {
    /// Runner backed by the real monotonic clock
    pub fn new(aggregation: Aggregation, config: TrialConfig) -> Self {
        Self::with_clock(aggregation, config, MonotonicClock::new())
    }
}

impl<C: Clock> TrialRunner<C> {
    /// Runner backed by a caller-supplied clock
    pub fn with_clock(aggregation: Aggregation, config: TrialConfig, clock: C) -> Self {
        Self {
            aggregation,
            config,
            clock,
        }
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    pub fn config(&self) -> TrialConfig {
        self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Measure infallible work; its return value is discarded
    pub fn measure<R>(&self, mut work: impl FnMut() -> R) -> Measurement {
        match self.try_measure(|| Ok::<R, Infallible>(work())) {
            Ok(measurement) => measurement,
            Err(never) => match never {},
        }
    }

    /// Measure fallible work
    ///
    /// The first error aborts the measurement: the remaining repetitions and trials
    /// are skipped and the error is returned unchanged.
    pub fn try_measure<T, E>(
        &self,
        mut work: impl FnMut() -> Result<T, E>,
    ) -> Result<Measurement, E> {
        let repetitions = self.config.repetitions;
        let trials = self.config.effective_trials(self.aggregation);

        tracing::debug!(
            aggregation = %self.aggregation,
            repetitions,
            trials,
            "starting measurement"
        );

        let mut aggregate = self.aggregation.accumulator();
        for trial in 0..trials {
            let start = self.clock.now();
            for call in 0..repetitions {
                match work() {
                    Ok(value) => {
                        black_box(value);
                    }
                    Err(e) => {
                        tracing::debug!(trial, call, "work failed, measurement aborted");
                        return Err(e);
                    }
                }
            }
            let end = self.clock.now();

            let duration = end.saturating_sub(start);
            tracing::trace!(trial, ?duration, "trial complete");
            aggregate.fold(duration);
        }

        let measurement = Measurement {
            aggregation: self.aggregation,
            repetitions,
            trials,
            elapsed: aggregate.finish(),
        };
        tracing::debug!(seconds = measurement.as_secs_f64(), "measurement complete");
        Ok(measurement)
    }
}
