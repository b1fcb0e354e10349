//! Validation and debugging utilities for BstMap.
//!
//! This module contains invariant checking for the tree: search order, parent
//! slot consistency and agreement between the tree and its arena. The checks
//! walk the tree with an explicit stack so they also work on skewed trees.

use crate::error::{BstError, BstResult};
use crate::types::{BstMap, Key, NodeId, ParentSlot, Side};

/// Exclusive key bounds inherited from the ancestors of a node.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    lower: Option<Key>,
    upper: Option<Key>,
}

impl Bounds {
    const UNBOUNDED: Self = Self {
        lower: None,
        upper: None,
    };

    fn admits(self, key: Key) -> bool {
        self.lower.map_or(true, |lower| key > lower) && self.upper.map_or(true, |upper| key < upper)
    }

    fn narrowed(self, key: Key, side: Side) -> Self {
        match side {
            Side::Left => Self {
                upper: Some(key),
                ..self
            },
            Side::Right => Self {
                lower: Some(key),
                ..self
            },
        }
    }
}

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl BstMap {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_structure().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_structure().map_err(|e| e.to_string())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BstResult<()> {
        self.check_structure()
            .map_err(|e| BstError::data_integrity(operation, &e.to_string()))
    }

    fn check_structure(&self) -> BstResult<()> {
        let reachable = self.check_nodes()?;

        if reachable != self.len {
            return Err(BstError::corrupted_tree(
                "Length",
                &format!("{} reachable nodes but len is {}", reachable, self.len),
            ));
        }

        let allocated = self.arena.len();
        if reachable != allocated {
            return Err(BstError::arena_error(
                "Arena consistency check",
                &format!("{} in tree vs {} in arena", reachable, allocated),
            ));
        }

        Ok(())
    }

    /// Walk every node reachable from the root, checking key bounds and parent
    /// slots. Returns the number of nodes visited.
    fn check_nodes(&self) -> BstResult<usize> {
        let Some(root) = self.root else {
            return Ok(0);
        };

        let root_node = self
            .arena
            .get(root)
            .ok_or_else(|| BstError::arena_error("Root lookup", &format!("stale root {}", root)))?;
        if let Some(slot) = root_node.parent {
            return Err(BstError::corrupted_tree(
                "Root",
                &format!("root {} claims parent {}", root, slot.parent),
            ));
        }

        let mut visited = 0;
        let mut stack: Vec<(NodeId, Bounds)> = vec![(root, Bounds::UNBOUNDED)];

        while let Some((id, bounds)) = stack.pop() {
            visited += 1;
            // More visits than live slots means a node is shared or a cycle exists.
            if visited > self.arena.len() {
                return Err(BstError::corrupted_tree(
                    "Links",
                    &format!("node {} reached more than once", id),
                ));
            }

            let node = self.arena.get(id).ok_or_else(|| {
                BstError::arena_error("Node lookup", &format!("stale child {}", id))
            })?;
            if !bounds.admits(node.key) {
                return Err(BstError::corrupted_tree(
                    "Order",
                    &format!("key {} at {} outside {:?}", node.key, id, bounds),
                ));
            }

            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                let expected = Some(ParentSlot::new(id, side));
                let actual = self.arena.get(child).map(|child_node| child_node.parent);
                if actual != Some(expected) {
                    return Err(BstError::corrupted_tree(
                        "Parent slot",
                        &format!("child {} of {} records {:?}", child, id, actual.flatten()),
                    ));
                }
                stack.push((child, bounds.narrowed(node.key, side)));
            }
        }

        Ok(visited)
    }
}
