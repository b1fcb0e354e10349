//! Construction logic for BstMap.
//!
//! Covers empty trees, single detached nodes, and the two bulk builders: the
//! balanced build from a sorted entry sequence and the insertion-order build
//! from a list of keys.

use tracing::{debug, instrument};

use crate::balance_operations::min_depth_for;
use crate::compact_arena::CompactArena;
use crate::entries::{first_unordered, Entry};
use crate::error::{BstError, InitResult};
use crate::types::{BstMap, BstNode, Key, NodeId, ParentSlot, Value, DEFAULT_CAPACITY};

impl BstMap {
    /// Create an empty tree with the default arena capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let tree = BstMap::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root_node().is_none());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty tree whose arena holds `capacity` nodes before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: CompactArena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Create a detached node: no children, no parent slot.
    ///
    /// The node is a plain value and lives in no tree; only the tree's own
    /// operations allocate nodes in its arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let node = BstMap::create_node(6, 60);
    /// assert_eq!((node.key(), node.value()), (6, 60));
    /// assert!(node.is_leaf());
    /// assert_eq!(node.parent(), None);
    /// ```
    pub fn create_node(key: Key, value: Value) -> BstNode {
        BstNode::new(key, value)
    }

    /// Allocate a detached node in this tree's arena. The caller must link it
    /// in and account for it in `len`.
    pub(crate) fn allocate_node(&mut self, key: Key, value: Value) -> NodeId {
        self.arena.allocate(Self::create_node(key, value))
    }

    /// Build a perfectly balanced tree from entries sorted by key.
    ///
    /// The middle entry (index `len / 2`) becomes the root, the entries before
    /// it the left subtree and the entries after it the right subtree,
    /// recursively. The resulting depth is ⌈log₂(n+1)⌉.
    ///
    /// Returns [`BstError::UnorderedEntries`] naming the first offending index
    /// if the keys are not strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::{BstMap, Entry};
    ///
    /// let entries: Vec<Entry> = [1, 2, 4, 6, 8, 9, 12]
    ///     .into_iter()
    ///     .map(|k| Entry::new(k, k * 10))
    ///     .collect();
    /// let tree = BstMap::create_from_ordered_array(&entries).unwrap();
    ///
    /// let root = tree.root_node().unwrap();
    /// assert_eq!(root.key(), 6);
    /// assert_eq!(root.left().unwrap().key(), 2);
    /// assert_eq!(root.right().unwrap().key(), 9);
    /// assert_eq!(tree.depth(), 3);
    /// ```
    #[instrument(level = "trace", skip(entries), fields(len = entries.len()))]
    pub fn create_from_ordered_array(entries: &[Entry]) -> InitResult<Self> {
        if let Some(index) = first_unordered(entries) {
            return Err(BstError::UnorderedEntries { index });
        }

        let mut tree = Self::with_capacity(entries.len());
        tree.build_balanced(entries);
        Ok(tree)
    }

    /// Build an unbalanced tree by inserting `keys` in order. Each key's value
    /// is its position in `keys`; a repeated key keeps its last position.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let tree = BstMap::from_keys(&[30, 10, 20]).unwrap();
    /// assert_eq!(tree.search(30), Some(&0));
    /// assert_eq!(tree.search(20), Some(&2));
    /// assert_eq!(tree.depth(), 3);
    /// ```
    pub fn from_keys(keys: &[Key]) -> InitResult<Self> {
        let mut tree = Self::with_capacity(keys.len());
        for (index, &key) in keys.iter().enumerate() {
            let position = Value::try_from(index).map_err(|_| BstError::ValueOverflow { index })?;
            tree.insert(key, position);
        }
        Ok(tree)
    }

    /// Replace the (empty) tree contents with a balanced build of `entries`,
    /// which the caller guarantees to be strictly ascending.
    pub(crate) fn build_balanced(&mut self, entries: &[Entry]) {
        debug_assert!(self.root.is_none() && self.arena.is_empty());
        self.root = self.build_subtree(entries, None);
        self.len = entries.len();
        debug!(len = self.len, depth = min_depth_for(self.len), "built balanced tree");
    }

    /// Recursion depth is bounded by ⌈log₂(n+1)⌉ because every call halves
    /// the slice.
    fn build_subtree(&mut self, entries: &[Entry], parent: Option<ParentSlot>) -> Option<NodeId> {
        if entries.is_empty() {
            return None;
        }

        let mid = entries.len() / 2;
        let Entry { key, value } = entries[mid];
        let id = self.allocate_node(key, value);
        self.arena[id].parent = parent;

        let left = self.build_subtree(&entries[..mid], Some(ParentSlot::left_of(id)));
        let right = self.build_subtree(&entries[mid + 1..], Some(ParentSlot::right_of(id)));

        let node = &mut self.arena[id];
        node.left = left;
        node.right = right;
        Some(id)
    }
}

impl Default for BstMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Key, Value)> for BstMap {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<(Key, Value)> for BstMap {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{entries_of_height_two, height_two_keys};

    #[test]
    fn test_new_tree_is_empty() {
        let tree = BstMap::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
        assert!(tree.arena_stats().total_capacity >= DEFAULT_CAPACITY);
    }

    #[test]
    fn test_create_node_is_detached() {
        let node = BstMap::create_node(6, 60);
        assert_eq!(node.key(), 6);
        assert_eq!(node.value(), 60);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(node.parent(), None);
    }

    #[test]
    fn test_create_node_leaves_tree_consistent() {
        let mut tree = BstMap::new();
        tree.insert(6, 60);
        let _detached = BstMap::create_node(1, 10);

        assert_eq!(tree.arena_stats().allocated_count, 1);
        assert!(tree.check_invariants());
        assert_eq!(tree.try_insert(2, 20), Ok(None));
        assert_eq!(tree.batch_insert(vec![(1, 10), (9, 90)]), Ok(vec![None, None]));
        assert_eq!(tree.try_remove(6), Ok(60));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_create_from_ordered_array_layout() {
        let entries = entries_of_height_two();
        let tree = BstMap::create_from_ordered_array(&entries).unwrap();

        let root = tree.root_node().unwrap();
        assert_eq!(root.key(), 6);
        assert_eq!(root.parent_slot(), None);

        let left = root.left().unwrap();
        let right = root.right().unwrap();
        assert_eq!(left.key(), 2);
        assert_eq!(right.key(), 9);
        assert_eq!(left.left().unwrap().key(), 1);
        assert_eq!(left.right().unwrap().key(), 4);
        assert_eq!(right.left().unwrap().key(), 8);
        assert_eq!(right.right().unwrap().key(), 12);

        assert_eq!(left.parent_slot(), Some(ParentSlot::left_of(root.id())));
        assert_eq!(right.parent_slot(), Some(ParentSlot::right_of(root.id())));
        assert_eq!(tree.len(), 7);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_create_from_ordered_array_empty() {
        let tree = BstMap::create_from_ordered_array(&[]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_create_from_ordered_array_even_length_takes_upper_middle() {
        let entries: Vec<Entry> = (1..=4).map(|k| Entry::new(k, k)).collect();
        let tree = BstMap::create_from_ordered_array(&entries).unwrap();
        assert_eq!(tree.root_node().unwrap().key(), 3);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_create_from_ordered_array_rejects_unsorted() {
        let entries = vec![Entry::new(1, 1), Entry::new(5, 5), Entry::new(3, 3)];
        assert_eq!(
            BstMap::create_from_ordered_array(&entries).unwrap_err(),
            BstError::UnorderedEntries { index: 2 }
        );

        let duplicates = vec![Entry::new(1, 1), Entry::new(1, 2)];
        assert_eq!(
            BstMap::create_from_ordered_array(&duplicates).unwrap_err(),
            BstError::UnorderedEntries { index: 1 }
        );
    }

    #[test]
    fn test_from_keys_uses_positions_as_values() {
        let tree = BstMap::from_keys(&height_two_keys()).unwrap();
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.search(6), Some(&0));
        assert_eq!(tree.search(12), Some(&6));
        assert_eq!(tree.depth(), 3);

        let repeated = BstMap::from_keys(&[4, 4, 2]).unwrap();
        assert_eq!(repeated.len(), 2);
        assert_eq!(repeated.search(4), Some(&1));
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut tree: BstMap = [(2, 20), (1, 10)].into_iter().collect();
        tree.extend([(3, 30), (1, 11)]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.search(1), Some(&11));
        assert!(tree.check_invariants());
    }
}
