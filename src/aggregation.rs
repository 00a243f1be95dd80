//! Aggregation strategies that reduce trial durations to one reported value

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How the durations of a measurement run are reduced to a single scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Elapsed time of one trial of `n` invocations
    #[default]
    Total,
    /// Elapsed time of one trial divided by `n`
    Average,
    /// Fastest of `m` trials
    Min,
    /// Slowest of `m` trials
    Max,
}

impl Aggregation {
    /// Total and average only ever time a single trial
    pub fn runs_single_trial(self) -> bool {
        matches!(self, Aggregation::Total | Aggregation::Average)
    }

    /// Start a running fold for this strategy
    pub fn accumulator(self) -> Accumulator {
        Accumulator::new(self)
    }

    /// Reported value in seconds for a folded trial duration
    pub fn seconds(self, elapsed: Duration, repetitions: u32) -> f64 {
        match self {
            Aggregation::Average => elapsed.as_secs_f64() / f64::from(repetitions),
            Aggregation::Total | Aggregation::Min | Aggregation::Max => elapsed.as_secs_f64(),
        }
    }

    /// Lowercase name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Aggregation::Total => "total",
            Aggregation::Average => "average",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running aggregate over trial durations
///
/// The minimum is seeded at the largest representable duration and the maximum at
/// zero, so the first folded trial always replaces the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    aggregation: Aggregation,
    value: Duration,
    folded: u32,
}

impl Accumulator {
    fn new(aggregation: Aggregation) -> Self {
        let value = match aggregation {
            Aggregation::Min => Duration::MAX,
            Aggregation::Total | Aggregation::Average | Aggregation::Max => Duration::ZERO,
        };
        Self {
            aggregation,
            value,
            folded: 0,
        }
    }

    /// Fold one trial duration into the aggregate
    pub fn fold(&mut self, duration: Duration) {
        self.value = match self.aggregation {
            Aggregation::Total | Aggregation::Average => self.value.saturating_add(duration),
            Aggregation::Min => self.value.min(duration),
            Aggregation::Max => self.value.max(duration),
        };
        self.folded += 1;
    }

    /// Number of trials folded so far
    pub fn folded(&self) -> u32 {
        self.folded
    }

    /// Finish the fold, returning the folded trial duration
    ///
    /// For average this is still the undivided trial; the division by `n` happens
    /// in [`Aggregation::seconds`] so sub-nanosecond results survive.
    pub fn finish(self) -> Duration {
        debug_assert!(self.folded > 0, "finished an aggregate with no trials");
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn fold_all(aggregation: Aggregation, trials: &[Duration]) -> Duration {
        let mut acc = aggregation.accumulator();
        for trial in trials {
            acc.fold(*trial);
        }
        acc.finish()
    }

    #[test]
    fn test_total_is_trial_duration() {
        let elapsed = fold_all(Aggregation::Total, &[ms(30)]);
        assert_eq!(elapsed, ms(30));
        assert_eq!(Aggregation::Total.seconds(elapsed, 3), 0.03);
    }

    #[test]
    fn test_average_divides_by_repetitions() {
        let elapsed = fold_all(Aggregation::Average, &[ms(30)]);
        assert_eq!(elapsed, ms(30));
        assert_eq!(Aggregation::Average.seconds(elapsed, 3), 0.03 / 3.0);
    }

    #[test]
    fn test_average_keeps_sub_nanosecond_precision() {
        let elapsed = Duration::from_nanos(400);
        let seconds = Aggregation::Average.seconds(elapsed, 1000);
        assert!(seconds > 0.0);
        assert!((seconds - 4e-10).abs() < 1e-22);

        let seconds = Aggregation::Average.seconds(Duration::from_nanos(10), 3);
        assert!((seconds - 10e-9 / 3.0).abs() < 1e-22);
        assert!(seconds > 3e-9);
    }

    #[test]
    fn test_min_picks_smallest() {
        let trials = [ms(12), ms(7), ms(9), ms(15)];
        assert_eq!(fold_all(Aggregation::Min, &trials), ms(7));
    }

    #[test]
    fn test_max_picks_largest() {
        let trials = [ms(12), ms(7), ms(9), ms(15)];
        assert_eq!(fold_all(Aggregation::Max, &trials), ms(15));
    }

    #[test]
    fn test_min_with_single_zero_trial() {
        assert_eq!(fold_all(Aggregation::Min, &[Duration::ZERO]), Duration::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no trials")]
    fn test_finish_without_trials_is_a_bug() {
        Aggregation::Min.accumulator().finish();
    }

    #[test]
    fn test_folded_count() {
        let mut acc = Aggregation::Max.accumulator();
        acc.fold(ms(1));
        acc.fold(ms(2));
        assert_eq!(acc.folded(), 2);
    }

    #[test]
    fn test_single_trial_strategies() {
        assert!(Aggregation::Total.runs_single_trial());
        assert!(Aggregation::Average.runs_single_trial());
        assert!(!Aggregation::Min.runs_single_trial());
        assert!(!Aggregation::Max.runs_single_trial());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Aggregation::Average.to_string(), "average");
        assert_eq!(Aggregation::default(), Aggregation::Total);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Aggregation::Min).unwrap();
        assert_eq!(json, "\"min\"");
        let parsed: Aggregation = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(parsed, Aggregation::Max);
    }
}
