use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Result, RewardError};

/// Configuration for one distribution run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Ranking CSV handed over by the scoring stage
    pub input_file: PathBuf,

    /// Where the proof artifact gets written
    pub output_file: PathBuf,

    /// Pretty-print the artifact JSON
    pub pretty: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (overridden by RUST_LOG)
    pub level: String,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("eigentrust_rankings.csv"),
            output_file: PathBuf::from("merkle_proofs.json"),
            pretty: true,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl DistributionConfig {
    /// Load configuration from a JSON file
    pub async fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).await.map_err(|e| {
            RewardError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            RewardError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
