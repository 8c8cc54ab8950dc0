//! Merkle commitment and inclusion-proof generation for reward
//! distributions.
//!
//! One run consumes an ordered `(address, score)` snapshot from the
//! scoring stage, commits to it with a positional Merkle tree, and
//! emits one self-describing inclusion proof per record plus the root.
//! A claimant later proves their allocation against the published root
//! alone; see [`merkle`] for the exact hashing contract an external
//! verifier must reproduce.

pub mod artifact;
pub mod config;
pub mod error;
pub mod merkle;
pub mod records;
pub mod types;

pub use error::{Result, RewardError};
pub use merkle::RewardTree;
pub use types::{NodeHash, ProofStep, RewardProof, RewardRecord};
