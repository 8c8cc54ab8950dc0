use sha3::{Digest, Sha3_256};

use crate::types::NodeHash;

/// Canonical decimal rendering of a reward amount.
///
/// The amount string is embedded directly in the leaf preimage, so this
/// rule is part of the commitment contract: the shortest decimal string
/// that round-trips the `f64`, with `.0` appended when the rendering
/// carries neither a decimal point nor an exponent. `1.0` encodes as
/// `"1.0"`, `0.012345` as `"0.012345"`. Any other formatting (trailing
/// zeros, scientific notation, different precision) produces a
/// different leaf and is a breaking change.
pub fn canonical_amount(amount: f64) -> String {
    let rendered = format!("{}", amount);
    if rendered.contains('.') || rendered.contains('e') {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}

fn sha3_hex_digest(data: &[u8]) -> NodeHash {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&result);
    NodeHash::new(bytes)
}

/// Hash one record into its leaf digest.
///
/// The preimage is the address immediately followed by the canonical
/// amount string, no separator. Encoding is total: any (string, f64)
/// pair hashes to a well-defined leaf.
pub fn encode_leaf(address: &str, amount: f64) -> NodeHash {
    let mut preimage = String::with_capacity(address.len() + 24);
    preimage.push_str(address);
    preimage.push_str(&canonical_amount(amount));
    sha3_hex_digest(preimage.as_bytes())
}

/// Hash a pair of sibling nodes into their parent.
///
/// The preimage is the lowercase hex encoding of the left child
/// followed by that of the right child. Hashing the hex strings rather
/// than the raw digests is a compatibility constraint (see the module
/// docs), as is the strict left-right order.
pub fn hash_pair(left: &NodeHash, right: &NodeHash) -> NodeHash {
    let mut preimage = String::with_capacity(128);
    preimage.push_str(&left.to_hex());
    preimage.push_str(&right.to_hex());
    sha3_hex_digest(preimage.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_amount_integral_values_keep_a_fraction() {
        assert_eq!(canonical_amount(1.0), "1.0");
        assert_eq!(canonical_amount(0.0), "0.0");
        assert_eq!(canonical_amount(250.0), "250.0");
    }

    #[test]
    fn test_canonical_amount_fractional_values_are_shortest_form() {
        assert_eq!(canonical_amount(2.5), "2.5");
        assert_eq!(canonical_amount(0.012345), "0.012345");
        assert_eq!(canonical_amount(0.1), "0.1");
    }

    #[test]
    fn test_encode_leaf_is_deterministic() {
        let a = encode_leaf("0xaa", 1.0);
        let b = encode_leaf("0xaa", 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_leaf_is_sensitive_to_amount() {
        assert_ne!(encode_leaf("0xaa", 1.0), encode_leaf("0xaa", 2.0));
    }

    #[test]
    fn test_encode_leaf_concatenation_has_no_separator() {
        assert_eq!(encode_leaf("0xaa", 1.5), sha3_hex_digest(b"0xaa1.5"));
        assert_eq!(encode_leaf("0xbb", 2.0), sha3_hex_digest(b"0xbb2.0"));
    }

    #[test]
    fn test_hash_pair_order_matters() {
        let left = encode_leaf("0xaa", 1.0);
        let right = encode_leaf("0xbb", 2.0);
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }

    #[test]
    fn test_hash_pair_self_pairing_is_well_defined() {
        let node = encode_leaf("0xcc", 5.0);
        assert_eq!(hash_pair(&node, &node), hash_pair(&node, &node));
    }
}
