//! Rendering measurements for standard output
//!
//! Text output is the bare seconds value; JSON output adds the parameters that
//! produced it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::aggregation::Aggregation;
use crate::runner::Measurement;

/// Output format for measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Seconds as a plain number (default)
    #[default]
    Text,
    /// JSON object for machine parsing
    Json,
}

/// A measurement as written in JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonMeasurement {
    pub aggregation: Aggregation,
    pub repetitions: u32,
    pub trials: u32,
    /// Aggregated duration in seconds
    pub seconds: f64,
}

impl From<&Measurement> for JsonMeasurement {
    fn from(measurement: &Measurement) -> Self {
        Self {
            aggregation: measurement.aggregation,
            repetitions: measurement.repetitions,
            trials: measurement.trials,
            seconds: measurement.as_secs_f64(),
        }
    }
}

/// Render a measurement in the requested format
pub fn render(measurement: &Measurement, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(measurement.to_string()),
        OutputFormat::Json => serde_json::to_string(&JsonMeasurement::from(measurement)),
    }
}
