//! CLI argument parsing for runtimer

use clap::Parser;
use std::path::PathBuf;

use crate::aggregation::Aggregation;
use crate::config::RuntimerConfig;
pub use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "runtimer")]
#[command(version)]
#[command(about = "Time repeated runs of a command", long_about = None)]
pub struct Cli {
    /// How trial durations are reduced to one number (default: total)
    #[arg(short = 'a', long = "aggregate", value_enum, value_name = "STRATEGY")]
    pub aggregation: Option<Aggregation>,

    /// Invocations of the command per trial (default: 1)
    #[arg(short = 'n', long = "repetitions", value_name = "N")]
    pub repetitions: Option<u32>,

    /// Number of timed trials for min/max (default: 1)
    #[arg(short = 'm', long = "trials", value_name = "M")]
    pub trials: Option<u32>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Read defaults from a TOML config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Command to time (everything after --)
    #[arg(last = true)]
    pub command: Option<Vec<String>>,
}

impl Cli {
    /// Apply command-line overrides on top of `base`
    pub fn resolve(&self, base: RuntimerConfig) -> RuntimerConfig {
        RuntimerConfig {
            aggregation: self.aggregation.unwrap_or(base.aggregation),
            repetitions: self.repetitions.unwrap_or(base.repetitions),
            trials: self.trials.unwrap_or(base.trials),
            format: self.format.unwrap_or(base.format),
        }
    }
}
