use crate::error::{Result, RewardError};
use crate::merkle::tree::RewardTree;
use crate::types::{ProofStep, RewardProof};

impl RewardTree {
    /// Generate the inclusion proof for one record.
    ///
    /// The record is re-encoded to its leaf digest and located by exact
    /// match against level 0 (first match wins for duplicates). A
    /// record absent from the snapshot is a per-lookup `NotFound`, not
    /// a panic, and leaves the tree untouched for other lookups.
    pub fn proof_for(&self, address: &str, amount: f64) -> Result<RewardProof> {
        let leaf_index = self.leaf_index_of(address, amount).ok_or_else(|| {
            RewardError::NotFound(format!(
                "record ({}, {}) is not in the committed snapshot",
                address, amount
            ))
        })?;

        let root = self.root().ok_or_else(|| {
            RewardError::NotFound("empty tree carries no root".to_string())
        })?;

        Ok(RewardProof {
            address: address.to_string(),
            amount,
            proof: self.sibling_path(leaf_index),
            root,
        })
    }

    /// Walk the sibling path from a leaf position to the root.
    ///
    /// The walk mirrors the builder's pairing exactly: an even index
    /// with an in-range right neighbor takes that neighbor
    /// (`isLeft=false`), an odd index takes its left neighbor
    /// (`isLeft=true`), and the unmatched last node of an odd-sized
    /// level records *itself* as sibling (`isLeft=false`), matching the
    /// self-pairing the builder performed on that level. Any asymmetry
    /// between the two walks would break reconstruction bit-for-bit.
    fn sibling_path(&self, leaf_index: usize) -> Vec<ProofStep> {
        let mut path = Vec::new();
        let mut index = leaf_index;

        // Every level except the root contributes one step.
        for level in 0..self.num_levels().saturating_sub(1) {
            let level_size = self.level_len(level);

            let (sibling, is_left) = if index % 2 == 0 {
                if index + 1 < level_size {
                    (index + 1, false)
                } else {
                    (index, false)
                }
            } else {
                (index - 1, true)
            };

            if let Some(hash) = self.node(level, sibling) {
                path.push(ProofStep {
                    hash: *hash,
                    is_left,
                });
            }

            index /= 2;
        }

        path
    }
}
