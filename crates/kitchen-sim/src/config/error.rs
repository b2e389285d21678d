//! Error types for settings loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`AppSettings`](super::AppSettings).
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidVariable { key: String, value: String },

    /// Settings parsed but cannot be used.
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
