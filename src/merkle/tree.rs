use tracing::debug;

use crate::merkle::leaf::{encode_leaf, hash_pair};
use crate::types::{NodeHash, RewardRecord};

/// Positional Merkle tree over an ordered reward snapshot.
///
/// Nodes live in a single flat arena, leaves first, with one start
/// offset per level. Node identity is `(level, position)`: level 0 is
/// the leaf digests in record order, the last level holds the root.
/// The tree is built once from a fixed snapshot and never mutated.
#[derive(Debug, Clone)]
pub struct RewardTree {
    records: Vec<RewardRecord>,
    nodes: Vec<NodeHash>,
    level_offsets: Vec<usize>,
}

impl RewardTree {
    /// Build the full tree from an ordered record snapshot.
    ///
    /// Construction is a pure, total function of the sequence: every
    /// level is derived from the previous one by pairing adjacent nodes
    /// left to right, and an unmatched last node on an odd-sized level
    /// is hashed with itself. An empty snapshot yields an empty tree.
    pub fn build(records: Vec<RewardRecord>) -> Self {
        let mut nodes: Vec<NodeHash> = records
            .iter()
            .map(|r| encode_leaf(&r.address, r.amount))
            .collect();

        let mut level_offsets = Vec::new();
        if nodes.is_empty() {
            return Self {
                records,
                nodes,
                level_offsets,
            };
        }

        level_offsets.push(0);
        let mut level_start = 0;
        let mut level_size = nodes.len();

        while level_size > 1 {
            for i in (0..level_size).step_by(2) {
                let left = nodes[level_start + i];
                let right = if i + 1 < level_size {
                    nodes[level_start + i + 1]
                } else {
                    // Odd level: the last node pairs with itself
                    left
                };
                nodes.push(hash_pair(&left, &right));
            }
            level_start += level_size;
            level_offsets.push(level_start);
            level_size = level_size.div_ceil(2);
        }

        debug!(
            leaves = records.len(),
            levels = level_offsets.len(),
            nodes = nodes.len(),
            "built reward tree"
        );

        Self {
            records,
            nodes,
            level_offsets,
        }
    }

    /// The committed root digest. Absent for an empty tree; for a
    /// single-leaf tree this is the leaf digest itself, unmodified.
    pub fn root(&self) -> Option<NodeHash> {
        self.nodes.last().copied()
    }

    /// The records this tree commits to, in committed order.
    pub fn records(&self) -> &[RewardRecord] {
        &self.records
    }

    /// Leaf digests (level 0), in record order.
    pub fn leaves(&self) -> &[NodeHash] {
        match self.level_offsets.len() {
            0 => &[],
            1 => &self.nodes,
            _ => &self.nodes[..self.level_offsets[1]],
        }
    }

    /// Number of levels, counting the leaf level and the root level.
    pub fn num_levels(&self) -> usize {
        self.level_offsets.len()
    }

    /// Number of nodes on one level.
    pub fn level_len(&self, level: usize) -> usize {
        match (
            self.level_offsets.get(level),
            self.level_offsets.get(level + 1),
        ) {
            (Some(start), Some(end)) => end - start,
            (Some(start), None) => self.nodes.len() - start,
            (None, _) => 0,
        }
    }

    /// Bounds-checked node access by `(level, position)`.
    pub fn node(&self, level: usize, position: usize) -> Option<&NodeHash> {
        if position >= self.level_len(level) {
            return None;
        }
        self.nodes.get(self.level_offsets[level] + position)
    }

    /// Index of the first leaf matching the given record, resolved by
    /// digest equality. Duplicate records resolve to the lowest index.
    pub fn leaf_index_of(&self, address: &str, amount: f64) -> Option<usize> {
        let target = encode_leaf(address, amount);
        self.leaves().iter().position(|leaf| *leaf == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, amount: f64) -> RewardRecord {
        RewardRecord::new(address, amount)
    }

    #[test]
    fn test_empty_tree() {
        let tree = RewardTree::build(Vec::new());
        assert!(tree.root().is_none());
        assert_eq!(tree.num_levels(), 0);
        assert!(tree.leaves().is_empty());
    }

    #[test]
    fn test_single_leaf_root_is_the_leaf() {
        let tree = RewardTree::build(vec![record("0xcc", 5.0)]);
        let leaf = encode_leaf("0xcc", 5.0);
        assert_eq!(tree.root(), Some(leaf));
        assert_eq!(tree.num_levels(), 1);
        assert_eq!(tree.level_len(0), 1);
    }

    #[test]
    fn test_two_leaf_root() {
        let tree = RewardTree::build(vec![record("0xaa", 1.0), record("0xbb", 2.0)]);
        let leaf0 = encode_leaf("0xaa", 1.0);
        let leaf1 = encode_leaf("0xbb", 2.0);
        assert_eq!(tree.root(), Some(hash_pair(&leaf0, &leaf1)));
        assert_eq!(tree.num_levels(), 2);
    }

    #[test]
    fn test_three_leaf_tree_self_pairs_the_last_node() {
        let records = vec![
            record("0xaa", 1.0),
            record("0xbb", 2.0),
            record("0xcc", 3.0),
        ];
        let tree = RewardTree::build(records);

        let l0 = encode_leaf("0xaa", 1.0);
        let l1 = encode_leaf("0xbb", 2.0);
        let l2 = encode_leaf("0xcc", 3.0);

        let left_parent = hash_pair(&l0, &l1);
        let right_parent = hash_pair(&l2, &l2);
        let expected_root = hash_pair(&left_parent, &right_parent);

        assert_eq!(tree.num_levels(), 3);
        assert_eq!(tree.level_len(0), 3);
        assert_eq!(tree.level_len(1), 2);
        assert_eq!(tree.level_len(2), 1);
        assert_eq!(tree.node(1, 1), Some(&right_parent));
        assert_eq!(tree.root(), Some(expected_root));
    }

    #[test]
    fn test_level_sizes_follow_ceil_halving() {
        let records: Vec<_> = (0..13)
            .map(|i| record(&format!("0x{:02x}", i), i as f64))
            .collect();
        let tree = RewardTree::build(records);

        let expected = [13usize, 7, 4, 2, 1];
        assert_eq!(tree.num_levels(), expected.len());
        for (level, size) in expected.iter().enumerate() {
            assert_eq!(tree.level_len(level), *size, "level {}", level);
        }
    }

    #[test]
    fn test_node_access_is_bounds_checked() {
        let tree = RewardTree::build(vec![record("0xaa", 1.0), record("0xbb", 2.0)]);
        assert!(tree.node(0, 2).is_none());
        assert!(tree.node(2, 0).is_none());
        assert!(tree.node(1, 0).is_some());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let records = vec![
            record("0xaa", 1.0),
            record("0xbb", 2.0),
            record("0xcc", 3.0),
        ];
        let first = RewardTree::build(records.clone());
        let second = RewardTree::build(records);
        assert_eq!(first.root(), second.root());
        assert_eq!(first.leaves(), second.leaves());
    }

    #[test]
    fn test_order_permutation_changes_the_root() {
        let forward = RewardTree::build(vec![
            record("0xaa", 1.0),
            record("0xbb", 2.0),
            record("0xcc", 3.0),
        ]);
        let permuted = RewardTree::build(vec![
            record("0xcc", 3.0),
            record("0xaa", 1.0),
            record("0xbb", 2.0),
        ]);
        assert_ne!(forward.root(), permuted.root());
    }

    #[test]
    fn test_single_amount_change_changes_the_root() {
        let base = RewardTree::build(vec![record("0xaa", 1.0), record("0xbb", 2.0)]);
        let changed = RewardTree::build(vec![record("0xaa", 1.0), record("0xbb", 2.5)]);
        assert_ne!(base.root(), changed.root());
    }

    #[test]
    fn test_duplicate_records_resolve_to_first_index() {
        let tree = RewardTree::build(vec![
            record("0xaa", 1.0),
            record("0xbb", 2.0),
            record("0xaa", 1.0),
        ]);
        assert_eq!(tree.leaf_index_of("0xaa", 1.0), Some(0));
    }

    #[test]
    fn test_missing_record_has_no_leaf_index() {
        let tree = RewardTree::build(vec![record("0xaa", 1.0)]);
        assert_eq!(tree.leaf_index_of("0xzz", 9.0), None);
        assert_eq!(tree.leaf_index_of("0xaa", 2.0), None);
    }
}
