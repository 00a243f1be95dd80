//! Measurement configuration
//!
//! [`TrialConfig`] carries the two counts every measurement needs. [`RuntimerConfig`]
//! is the optional file-backed layer the binary reads defaults from.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::aggregation::Aggregation;
use crate::error::{Result, RuntimerError};
use crate::report::OutputFormat;

/// Repetition and trial counts for one measurement
///
/// Both counts must be at least 1. A zero count is rejected instead of producing
/// an empty, zero-length measurement.
///
/// # Example
/// ```
/// use runtimer::config::TrialConfig;
///
/// let config = TrialConfig::new(100).unwrap().with_trials(10).unwrap();
/// assert_eq!(config.repetitions, 100);
/// assert_eq!(config.trials, 10);
/// assert!(TrialConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Invocations of the work per trial (`n`)
    pub repetitions: u32,
    /// Timed trials per measurement (`m`); ignored by total and average
    pub trials: u32,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            repetitions: 1,
            trials: 1,
        }
    }
}

impl TrialConfig {
    /// `repetitions` invocations in a single trial
    pub fn new(repetitions: u32) -> Result<Self> {
        let config = Self {
            repetitions,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the number of trials
    pub fn with_trials(self, trials: u32) -> Result<Self> {
        let config = Self { trials, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.repetitions < 1 {
            return Err(RuntimerError::InvalidConfiguration(format!(
                "repetitions must be >= 1, got {}",
                self.repetitions
            )));
        }

        if self.trials < 1 {
            return Err(RuntimerError::InvalidConfiguration(format!(
                "trials must be >= 1, got {}",
                self.trials
            )));
        }

        Ok(())
    }

    /// Trials actually timed under `aggregation`
    pub fn effective_trials(&self, aggregation: Aggregation) -> u32 {
        if aggregation.runs_single_trial() {
            1
        } else {
            self.trials
        }
    }
}

/// Defaults for the `runtimer` binary, loadable from a TOML file
///
/// Every field is optional in the file; missing fields keep their defaults.
///
/// ```toml
/// aggregation = "min"
/// repetitions = 100
/// trials = 10
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimerConfig {
    pub aggregation: Aggregation,
    pub repetitions: u32,
    pub trials: u32,
    pub format: OutputFormat,
}

impl Default for RuntimerConfig {
    fn default() -> Self {
        let trials = TrialConfig::default();
        Self {
            aggregation: Aggregation::default(),
            repetitions: trials.repetitions,
            trials: trials.trials,
            format: OutputFormat::default(),
        }
    }
}

impl RuntimerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimerError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Parse configuration from TOML text; `path` is only used in error messages
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| RuntimerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(?config, path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Validated counts for the runner
    pub fn trial_config(&self) -> Result<TrialConfig> {
        TrialConfig::new(self.repetitions)?.with_trials(self.trials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = TrialConfig::default();
        assert_eq!(config.repetitions, 1);
        assert_eq!(config.trials, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let err = TrialConfig::new(0).unwrap_err();
        assert!(matches!(err, RuntimerError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("repetitions"));
    }

    #[test]
    fn test_zero_trials_rejected() {
        let err = TrialConfig::new(5).unwrap().with_trials(0).unwrap_err();
        assert!(err.to_string().contains("trials must be >= 1"));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_validate_catches_direct_mutation() {
        let mut config = TrialConfig::default();
        config.repetitions = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_trials() {
        let config = TrialConfig::new(3).unwrap().with_trials(5).unwrap();
        assert_eq!(config.effective_trials(Aggregation::Total), 1);
        assert_eq!(config.effective_trials(Aggregation::Average), 1);
        assert_eq!(config.effective_trials(Aggregation::Min), 5);
        assert_eq!(config.effective_trials(Aggregation::Max), 5);
    }

    #[test]
    fn test_runtimer_config_from_toml() {
        let toml = r#"
            aggregation = "min"
            repetitions = 100
            trials = 10
            format = "json"
        "#;
        let config = RuntimerConfig::from_toml_str(toml, Path::new("runtimer.toml")).unwrap();
        assert_eq!(config.aggregation, Aggregation::Min);
        assert_eq!(config.repetitions, 100);
        assert_eq!(config.trials, 10);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_runtimer_config_partial_file_keeps_defaults() {
        let config =
            RuntimerConfig::from_toml_str("repetitions = 7", Path::new("runtimer.toml")).unwrap();
        assert_eq!(config.repetitions, 7);
        assert_eq!(config.trials, 1);
        assert_eq!(config.aggregation, Aggregation::Total);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_runtimer_config_rejects_unknown_fields() {
        let err = RuntimerConfig::from_toml_str("warmup = 3", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, RuntimerError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_runtimer_config_missing_file() {
        let path = PathBuf::from("/nonexistent/runtimer.toml");
        let err = RuntimerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RuntimerError::ConfigFile { .. }));
    }

    #[test]
    fn test_runtimer_config_trial_config_validates() {
        let config = RuntimerConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(config.trial_config().is_err());
        assert!(RuntimerConfig::default().trial_config().is_ok());
    }
}
