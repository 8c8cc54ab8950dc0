//! Merkle commitment over an ordered reward snapshot.
//!
//! The tree commits to a positional sequence of `(address, amount)`
//! records: level 0 is the leaf digests in record order, each parent is
//! the hash of its two children in left-right order, and an unmatched
//! last node on an odd-sized level is paired with itself. Pairing is
//! strictly positional — the same multiset of records in a different
//! order generally commits to a different root, and verifiers depend on
//! that order stability.
//!
//! Compatibility note for integrators: the digest is **NIST SHA3-256**,
//! not Ethereum's keccak-256, even though reward trees of this shape
//! are commonly described as keccak-based. Published roots were
//! produced with SHA3-256; switching hash families invalidates every
//! proof. Parents are additionally hashed over the lowercase *hex
//! encodings* of their children (ASCII bytes), not the raw digests —
//! an external verifier must reproduce both choices exactly.

pub mod leaf;
pub mod proof;
pub mod tree;

pub use leaf::{canonical_amount, encode_leaf, hash_pair};
pub use tree::RewardTree;
