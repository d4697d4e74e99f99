//! Error types for loading configuration and records.
//!
//! Page behaviour never fails: missing elements are skipped. Errors only
//! surface where files are read, i.e. the CLI and tests.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or footprint records.
#[derive(Debug, Error)]
pub enum FootprintError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::ReportConfig`].
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Config file
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// The record is not valid JSON for a footprint record.
    #[error("failed to parse record: {0}")]
    RecordParse(#[from] serde_json::Error),

    /// The record parsed but holds out-of-range values.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A configured range is empty or inverted.
    #[error("invalid range for {name}: {min} must be below {max}")]
    InvalidRange {
        /// Config key
        name: &'static str,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, FootprintError>;
