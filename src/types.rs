use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RewardError};

/// One reward allocation: an opaque address paired with a numeric score.
///
/// Records are positional — the sequence they arrive in is the sequence
/// the tree commits to, so reordering them changes the root. Addresses
/// are taken as given; callers that want case-insensitive matching must
/// normalize before handing records in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    /// Opaque address identifier (e.g. a lower-cased hex account)
    pub address: String,

    /// Non-negative reward score
    pub amount: f64,
}

impl RewardRecord {
    pub fn new(address: impl Into<String>, amount: f64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// A 32-byte node digest, carried as raw bytes and rendered as
/// lowercase hex at every external boundary (artifact JSON, pair
/// hashing, logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHash([u8; 32]);

impl NodeHash {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering. This exact string is what pair hashing
    /// consumes, so it is part of the compatibility surface.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| RewardError::MalformedRecord(format!("invalid hex digest: {}", e)))?;
        if bytes.len() != 32 {
            return Err(RewardError::MalformedRecord(format!(
                "invalid digest length: {} (expected 32)",
                bytes.len()
            )));
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&bytes);
        Ok(Self(digest))
    }
}

impl Serialize for NodeHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for NodeHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NodeHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// One step of an inclusion proof: the sibling digest for the current
/// level and which side of the concatenation it sits on during
/// reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Sibling node digest
    pub hash: NodeHash,

    /// True when the sibling is concatenated before the running value
    #[serde(rename = "isLeft")]
    pub is_left: bool,
}

/// A complete inclusion proof for one record, bundled with the record
/// itself and the root so each entry in the artifact is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardProof {
    pub address: String,

    pub amount: f64,

    /// Sibling path from the leaf level up to (excluding) the root
    pub proof: Vec<ProofStep>,

    pub root: NodeHash,
}
