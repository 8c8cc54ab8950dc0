use thiserror::Error;
use std::io;

/// Core error types for the reward proof generator
#[derive(Error, Debug)]
pub enum RewardError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input missing: {0}")]
    InputMissing(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl RewardError {
    /// Whether this error is a per-lookup miss rather than a run-fatal
    /// condition. Proof generation for other records continues past these.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RewardError::NotFound(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RewardError>;
