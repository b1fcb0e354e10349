//! GET operations for BstMap.
//!
//! This module contains the read operations: key lookup, min/max retrieval
//! and node access. Every descent is a loop; a miss or an empty tree is
//! reported as `None` (or `BstError::KeyNotFound` for the checked variants).

use crate::error::{BstError, BstResult, KeyResult};
use crate::node::NodeRef;
use crate::types::{BstMap, Key, NodeId, Side, Value};
use std::cmp::Ordering;

impl BstMap {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut tree = BstMap::new();
    /// assert_eq!(tree.search(1), None);
    /// tree.insert(1, 10);
    /// assert_eq!(tree.search(1), Some(&10));
    /// assert_eq!(tree.search(2), None);
    /// ```
    pub fn search(&self, key: Key) -> Option<&Value> {
        self.find_id(key).map(|id| &self.arena[id].value)
    }

    /// Get a mutable reference to the value for a key.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut Value> {
        let id = self.find_id(key)?;
        Some(&mut self.arena[id].value)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: Key) -> bool {
        self.find_id(key).is_some()
    }

    /// Get value for a key, returning a `KeyNotFound` error if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::{BstError, BstMap};
    ///
    /// let mut tree = BstMap::new();
    /// tree.insert(1, 10);
    /// assert_eq!(tree.get_item(1), Ok(&10));
    /// assert_eq!(tree.get_item(2), Err(BstError::KeyNotFound));
    /// ```
    pub fn get_item(&self, key: Key) -> KeyResult<&Value> {
        self.search(key).ok_or(BstError::KeyNotFound)
    }

    /// Look up several keys, failing on the first absent one.
    pub fn get_many(&self, keys: &[Key]) -> BstResult<Vec<&Value>> {
        keys.iter().map(|&key| self.get_item(key)).collect()
    }

    /// Nodes visited while searching for `key`, root first, together with the
    /// value found (if any).
    ///
    /// On a hit the path ends at the node holding `key`; on a miss it ends at
    /// the node under which `key` would be inserted. The empty tree yields an
    /// empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let tree: BstMap = [(6, 60), (2, 20), (9, 90), (8, 80)].into_iter().collect();
    ///
    /// let (path, found) = tree.search_path(8);
    /// let keys: Vec<i32> = path.iter().map(|&id| tree.node(id).unwrap().key()).collect();
    /// assert_eq!(keys, vec![6, 9, 8]);
    /// assert_eq!(found, Some(&80));
    /// ```
    pub fn search_path(&self, key: Key) -> (Vec<NodeId>, Option<&Value>) {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(id) = current {
            path.push(id);
            let node = &self.arena[id];
            current = match key.cmp(&node.key) {
                Ordering::Equal => return (path, Some(&node.value)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        (path, None)
    }

    /// The node with the smallest key, or `None` for the empty tree.
    pub fn find_min(&self) -> Option<NodeRef<'_>> {
        let root = self.root?;
        NodeRef::new(&self.arena, self.extreme_id(root, Side::Left))
    }

    /// The node with the largest key, or `None` for the empty tree.
    pub fn find_max(&self) -> Option<NodeRef<'_>> {
        let root = self.root?;
        NodeRef::new(&self.arena, self.extreme_id(root, Side::Right))
    }

    /// Handle of the root node, `None` for the empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// View of the root node, `None` for the empty tree.
    pub fn root_node(&self) -> Option<NodeRef<'_>> {
        self.root.and_then(|id| NodeRef::new(&self.arena, id))
    }

    /// View of the node holding `key`.
    pub fn find_node(&self, key: Key) -> Option<NodeRef<'_>> {
        self.find_id(key).and_then(|id| NodeRef::new(&self.arena, id))
    }

    /// View of a node by handle; `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        NodeRef::new(&self.arena, id)
    }

    // ============================================================================
    // PRIVATE HELPER METHODS FOR GET OPERATIONS
    // ============================================================================

    /// Descend from the root to the node holding `key`.
    pub(crate) fn find_id(&self, key: Key) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Follow `side` children from `start` as far as possible.
    pub(crate) fn extreme_id(&self, start: NodeId, side: Side) -> NodeId {
        let mut current = start;
        while let Some(child) = self.arena[current].child(side) {
            current = child;
        }
        current
    }
}
