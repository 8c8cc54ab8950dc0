use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::error::{Result, RewardError};
use crate::merkle::RewardTree;
use crate::types::RewardProof;

/// Generate the inclusion proof for every committed record, in record
/// order.
///
/// Each lookup is independent and read-only against the finished tree.
/// A per-record miss only drops that record from the artifact; anything
/// else aborts the run.
pub fn generate_proofs(tree: &RewardTree) -> Result<Vec<RewardProof>> {
    let mut proofs = Vec::with_capacity(tree.records().len());

    for record in tree.records() {
        match tree.proof_for(&record.address, record.amount) {
            Ok(proof) => proofs.push(proof),
            Err(e) if e.is_not_found() => {
                warn!("skipping proof for ({}, {}): {}", record.address, record.amount, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(proofs)
}

/// Write the proof artifact: a JSON array of self-describing proof
/// records, each repeating the root for standalone verification.
pub async fn export_proofs(proofs: &[RewardProof], output: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(proofs)
    } else {
        serde_json::to_string(proofs)
    }
    .map_err(|e| RewardError::Export(format!("failed to serialize proof artifact: {}", e)))?;

    fs::write(output, json)
        .await
        .map_err(|e| RewardError::Export(format!("failed to write {}: {}", output.display(), e)))?;

    info!("wrote {} proofs to {}", proofs.len(), output.display());
    Ok(())
}
