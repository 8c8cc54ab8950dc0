use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::error::{Result, RewardError};
use crate::types::RewardRecord;

/// One row of the ranking CSV handed over by the scoring stage.
#[derive(Debug, serde::Deserialize)]
struct RankingRow {
    address: String,
    score: f64,
}

/// Load the ordered record snapshot from a ranking CSV.
///
/// The file carries an `address,score` header followed by one row per
/// record. Row order is preserved exactly — it is the order the tree
/// commits to. A missing file is `InputMissing`; any unparseable row
/// fails the whole load, no partial snapshot is returned. An empty file
/// with a valid header is tolerated and yields an empty snapshot.
pub async fn load_records(path: &Path) -> Result<Vec<RewardRecord>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(RewardError::InputMissing(format!(
            "records file not found: {}",
            path.display()
        )));
    }

    let raw = fs::read(path).await?;

    let mut reader = csv::Reader::from_reader(raw.as_slice());
    let mut records = Vec::new();

    for (line, row) in reader.deserialize::<RankingRow>().enumerate() {
        let row = row.map_err(|e| {
            RewardError::MalformedRecord(format!("row {}: {}", line + 1, e))
        })?;
        records.push(RewardRecord::new(row.address, row.score));
    }

    if records.is_empty() {
        warn!("records file {} holds no rows", path.display());
    } else {
        info!("loaded {} records from {}", records.len(), path.display());
    }

    Ok(records)
}
