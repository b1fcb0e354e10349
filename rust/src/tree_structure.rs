//! Tree structure management operations for BstMap.
//!
//! This module contains the tree-level operations that manage the overall
//! structure: size queries, clearing, node counting and arena statistics.

use crate::compact_arena::CompactArenaStats;
use crate::types::BstMap;

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl BstMap {
    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every entry. Handles taken before the call no longer resolve.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Slot usage of the arena backing this tree.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }

    /// Count the nodes actually reachable from the root.
    pub fn count_nodes_in_tree(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            count += 1;
            let node = &self.arena[id];
            stack.extend(node.left);
            stack.extend(node.right);
        }
        count
    }
}
