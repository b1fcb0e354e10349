//! Iterator implementations for BstMap.
//!
//! In-order iteration keeps an explicit stack of the ancestors still to be
//! visited, so walking a skewed tree costs heap memory rather than call
//! stack. `traverse` collects the same walk into an `OrderedEntries`.

use crate::compact_arena::CompactArena;
use crate::entries::OrderedEntries;
use crate::types::{BstMap, BstNode, Key, NodeId, Value};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over `(key, value)` pairs.
#[derive(Debug, Clone)]
pub struct ItemIterator<'a> {
    arena: &'a CompactArena<BstNode>,
    /// Nodes whose left subtree has been pushed but which are not yet yielded.
    stack: Vec<NodeId>,
    remaining: usize,
}

/// Iterator over keys in ascending order.
#[derive(Debug, Clone)]
pub struct KeyIterator<'a> {
    items: ItemIterator<'a>,
}

/// Iterator over values in key order.
#[derive(Debug, Clone)]
pub struct ValueIterator<'a> {
    items: ItemIterator<'a>,
}

// ============================================================================
// BSTMAP ITERATOR METHODS
// ============================================================================

impl BstMap {
    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn items(&self) -> ItemIterator<'_> {
        ItemIterator::new(self)
    }

    /// Alias for [`items`](Self::items).
    pub fn iter(&self) -> ItemIterator<'_> {
        self.items()
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> KeyIterator<'_> {
        KeyIterator {
            items: self.items(),
        }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_> {
        ValueIterator {
            items: self.items(),
        }
    }

    /// Snapshot the tree as a sorted entry sequence (in-order walk).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let tree: BstMap = [(6, 6), (2, 2), (9, 9)].into_iter().collect();
    /// let keys: Vec<i32> = tree.traverse().keys().collect();
    /// assert_eq!(keys, vec![2, 6, 9]);
    ///
    /// assert!(BstMap::new().traverse().is_empty());
    /// ```
    pub fn traverse(&self) -> OrderedEntries {
        let mut entries = OrderedEntries::with_capacity(self.len);
        for (key, value) in self.items() {
            entries.push(key, value);
        }
        entries
    }
}

// ============================================================================
// ITEMITERATOR IMPLEMENTATION
// ============================================================================

impl<'a> ItemIterator<'a> {
    pub fn new(tree: &'a BstMap) -> Self {
        let mut iter = Self {
            arena: &tree.arena,
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.arena[id].left;
        }
    }
}

impl Iterator for ItemIterator<'_> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[id];
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ItemIterator<'_> {}

impl Iterator for KeyIterator<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl Iterator for ValueIterator<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a> IntoIterator for &'a BstMap {
    type Item = (Key, Value);
    type IntoIter = ItemIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}
