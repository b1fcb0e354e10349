//! DELETE operations for BstMap.
//!
//! Standard three-case deletion. A node with at most one child is spliced
//! out: its child (if any) takes over the node's parent slot. A node with two
//! children keeps its identity; it receives the key and value of its in-order
//! successor, and the successor node, which has no left child, is spliced out
//! of the right subtree instead.

use tracing::{instrument, trace};

use crate::error::{BstError, ModifyResult};
use crate::types::{BstMap, Key, NodeId, ParentSlot, Side, Value};

impl BstMap {
    /// Remove a key from the tree, returning its value if it was present.
    ///
    /// An absent key (or an empty tree) leaves the tree untouched. When the
    /// removed key sat in a node with two children that node stays in place,
    /// so removing the root's key keeps the same root handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut tree: BstMap = [(6, 60), (2, 20), (9, 90)].into_iter().collect();
    /// let root = tree.root();
    ///
    /// assert_eq!(tree.remove(6), Some(60));
    /// assert_eq!(tree.root(), root);
    /// assert_eq!(tree.root_node().unwrap().key(), 9);
    /// assert_eq!(tree.remove(6), None);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        let id = self.find_id(key)?;
        let node = &self.arena[id];

        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.extreme_id(right, Side::Left);
                let (successor_key, successor_value) = {
                    let successor_node = &self.arena[successor];
                    (successor_node.key, successor_node.value)
                };
                trace!(key, successor_key, "two children, copying successor");

                let target = &mut self.arena[id];
                target.key = successor_key;
                let removed = std::mem::replace(&mut target.value, successor_value);
                self.splice_out(successor);
                Some(removed)
            }
            _ => {
                trace!(key, children = node.child_count(), "splicing out node");
                let removed = node.value;
                self.splice_out(id);
                Some(removed)
            }
        }
    }

    /// Remove with invariant validation, reporting an empty tree or a missing
    /// key as an error.
    pub fn try_remove(&mut self, key: Key) -> ModifyResult<Value> {
        if self.is_empty() {
            return Err(BstError::EmptyTree);
        }
        self.validate_for_operation("remove")?;
        let value = self.remove(key).ok_or(BstError::KeyNotFound)?;
        self.validate_for_operation("remove")?;
        Ok(value)
    }

    /// Remove and return the smallest entry.
    pub fn pop_first(&mut self) -> Option<(Key, Value)> {
        let key = self.find_min()?.key();
        self.remove(key).map(|value| (key, value))
    }

    /// Remove and return the largest entry.
    pub fn pop_last(&mut self) -> Option<(Key, Value)> {
        let key = self.find_max()?.key();
        self.remove(key).map(|value| (key, value))
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Unlink a node with at most one child and release it.
    ///
    /// The child, if any, is promoted into the node's parent slot and its own
    /// parent slot rewritten to match.
    fn splice_out(&mut self, id: NodeId) {
        let node = &self.arena[id];
        debug_assert!(node.child_count() <= 1);
        let child = node.left.or(node.right);
        let slot = node.parent;

        self.replace_in_slot(slot, child);
        if let Some(child) = child {
            self.arena[child].parent = slot;
        }

        self.arena.deallocate(id);
        self.len -= 1;
    }

    /// Point `slot` at `child`; a `None` slot means the root.
    fn replace_in_slot(&mut self, slot: Option<ParentSlot>, child: Option<NodeId>) {
        match slot {
            None => self.root = child,
            Some(ParentSlot { parent, side }) => self.arena[parent].set_child(side, child),
        }
    }
}
