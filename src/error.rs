//! Error types for runtimer
//!
//! Errors raised by the measured work are never wrapped here: they are the
//! caller's own type and are handed back unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring a measurement
#[derive(Error, Debug)]
pub enum RuntimerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for runtimer operations
pub type Result<T> = std::result::Result<T, RuntimerError>;
