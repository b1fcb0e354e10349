//! Rebalancing and shape metrics for BstMap.
//!
//! The tree never rebalances on its own. `balance` is the only corrective
//! operation: it snapshots the entries in order and rebuilds a minimum-depth
//! tree from them.

use std::collections::HashMap;

use tracing::instrument;

use crate::types::{BstMap, NodeId};

/// Depth of a perfectly balanced tree holding `len` entries, ⌈log₂(len+1)⌉.
pub fn min_depth_for(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

/// Number of entries a perfect tree of `depth` levels holds, 2^depth - 1.
/// Saturates at `usize::MAX`.
pub fn max_entries_for_depth(depth: usize) -> usize {
    u32::try_from(depth)
        .ok()
        .and_then(|depth| 1usize.checked_shl(depth))
        .map_or(usize::MAX, |nodes| nodes - 1)
}

impl BstMap {
    /// Rebuild the tree with minimum depth, keeping every entry.
    ///
    /// All existing nodes are released and a fresh set is allocated by the
    /// balanced builder, so handles taken before the call no longer resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut tree: BstMap = (1..=7).map(|k| (k, k)).collect();
    /// assert_eq!(tree.depth(), 7);
    ///
    /// tree.balance();
    /// assert_eq!(tree.depth(), 3);
    /// assert_eq!(tree.root_node().unwrap().key(), 4);
    /// assert!(tree.keys().eq(1..=7));
    /// ```
    #[instrument(level = "trace", skip(self), fields(len = self.len))]
    pub fn balance(&mut self) {
        let entries = self.traverse();
        self.arena.clear();
        self.root = None;
        self.len = 0;
        self.build_balanced(entries.as_slice());
    }

    /// Number of levels: 0 for the empty tree, 1 for a single node.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.arena[id];
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Edges on the longest root-to-leaf path; `None` for the empty tree.
    pub fn height(&self) -> Option<usize> {
        self.depth().checked_sub(1)
    }

    /// True if at every node the depths of the two subtrees differ by at most
    /// one.
    pub fn is_balanced(&self) -> bool {
        let mut depths: HashMap<NodeId, usize> = HashMap::with_capacity(self.len);
        let mut stack: Vec<(NodeId, bool)> = self.root.map(|root| (root, false)).into_iter().collect();

        while let Some((id, children_done)) = stack.pop() {
            let node = &self.arena[id];
            if children_done {
                let left = node.left.map_or(0, |child| depths[&child]);
                let right = node.right.map_or(0, |child| depths[&child]);
                if left.abs_diff(right) > 1 {
                    return false;
                }
                depths.insert(id, 1 + left.max(right));
            } else {
                stack.push((id, true));
                stack.extend(node.left.map(|child| (child, false)));
                stack.extend(node.right.map(|child| (child, false)));
            }
        }
        true
    }
}
