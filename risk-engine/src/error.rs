//! Error types for the risk scoring engine

use thiserror::Error;

/// Risk engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Probability or severity outside the 1-5 matrix range
    #[error("probability and severity must be between 1 and 5 (got probability {probability}, severity {severity})")]
    InvalidRange {
        /// Probability that was supplied
        probability: u8,
        /// Severity that was supplied
        severity: u8,
    },

    /// Catalog entry or assessment draft failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Selected control id is not present in the supplied catalog
    #[error("Unknown control: {0}")]
    UnknownControl(u64),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
