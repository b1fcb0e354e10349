//! INSERT operations for BstMap.
//!
//! Insertion descends iteratively from the root, so a fully skewed tree
//! cannot exhaust the call stack. A new node is attached at the first absent
//! child slot and records that slot as its parent slot.

use tracing::instrument;

use crate::error::{BstResultExt, ModifyResult};
use crate::types::{BstMap, Key, NodeId, ParentSlot, Side, Value};
use std::cmp::Ordering;

impl BstMap {
    /// Insert a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns the previous value if the key was already present; in that case
    /// the tree shape is unchanged. The root only changes when inserting into
    /// an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut tree = BstMap::new();
    /// assert_eq!(tree.insert(1, 10), None);
    /// assert_eq!(tree.insert(1, 11), Some(10));
    /// assert_eq!(tree.search(1), Some(&11));
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        let Some(mut current) = self.root else {
            let id = self.allocate_node(key, value);
            self.root = Some(id);
            self.len += 1;
            return None;
        };

        loop {
            let node = &mut self.arena[current];
            let side = match key.cmp(&node.key) {
                Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    self.attach_new(ParentSlot::new(current, side), key, value);
                    return None;
                }
            }
        }
    }

    /// Insert with invariant validation before and after the mutation.
    pub fn try_insert(&mut self, key: Key, value: Value) -> ModifyResult<Option<Value>> {
        self.validate_for_operation("insert")?;
        let old_value = self.insert(key, value);
        self.validate_for_operation("insert")?;
        Ok(old_value)
    }

    /// Insert every item with [`try_insert`](Self::try_insert).
    ///
    /// On failure the batch is rolled back: keys it added are removed and
    /// values it overwrote are restored.
    pub fn batch_insert(&mut self, items: Vec<(Key, Value)>) -> ModifyResult<Vec<Option<Value>>> {
        let mut results = Vec::with_capacity(items.len());
        let mut applied: Vec<(Key, Option<Value>)> = Vec::new();

        for (key, value) in items {
            match self.try_insert(key, value).with_operation("batch_insert") {
                Ok(old_value) => {
                    results.push(old_value);
                    applied.push((key, old_value));
                }
                Err(e) => {
                    self.roll_back(applied);
                    return Err(e);
                }
            }
        }

        Ok(results)
    }

    fn roll_back(&mut self, applied: Vec<(Key, Option<Value>)>) {
        for (key, old_value) in applied.into_iter().rev() {
            match old_value {
                Some(value) => {
                    self.insert(key, value);
                }
                None => {
                    self.remove(key);
                }
            }
        }
    }

    /// Allocate a node and hang it from `slot`, which must be empty.
    pub(crate) fn attach_new(&mut self, slot: ParentSlot, key: Key, value: Value) -> NodeId {
        debug_assert!(self.arena[slot.parent].child(slot.side).is_none());
        let id = self.allocate_node(key, value);
        self.arena[id].parent = Some(slot);
        self.arena[slot.parent].set_child(slot.side, Some(id));
        self.len += 1;
        id
    }
}
