//! Runtimer - repeat a unit of work and report how long it took
//!
//! Wrap a closure with one of [`total_runtime`], [`average_runtime`],
//! [`min_runtime`] or [`max_runtime`] and call [`Timed::invoke`] to get a
//! [`Measurement`] back. Nothing is printed; the caller decides what to do with the
//! number.
//!
//! [`clock::ScriptedClock`] is a testing aid: it replays fixed clock readings so
//! measurements can be asserted exactly. It is not re-exported at the crate root.
//!
//! ```
//! use runtimer::min_runtime;
//!
//! // 10 trials, each invoking the closure 100 times; keep the fastest trial
//! let mut timed = min_runtime(100, 10, || (0..64u64).product::<u64>()).unwrap();
//! let fastest = timed.invoke();
//! assert_eq!(fastest.trials, 10);
//! ```

pub mod aggregation;
pub mod cli;
pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod timed;

pub use aggregation::Aggregation;
pub use clock::{Clock, MonotonicClock};
pub use config::{RuntimerConfig, TrialConfig};
pub use error::{Result, RuntimerError};
pub use runner::{Measurement, TrialRunner};
pub use timed::{average_runtime, max_runtime, min_runtime, total_runtime, Timed};
