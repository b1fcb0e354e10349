//! Unbalanced binary search tree map over integer keys.
//!
//! `BstMap` stores unique `i32` keys with `i32` values in an arena-backed
//! binary search tree. Every node records the parent slot it hangs from, so
//! removal re-links replacements without a second descent. The tree does not
//! rebalance on insert or remove; [`BstMap::balance`] rebuilds a
//! minimum-depth tree on demand and [`BstMap::create_from_ordered_array`]
//! builds one directly from sorted entries.
//!
//! ```
//! use bstmap::BstMap;
//!
//! let mut tree = BstMap::from_keys(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
//! assert_eq!(tree.depth(), 7);
//!
//! tree.balance();
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.search(5), Some(&4));
//! ```

mod balance_operations;
mod compact_arena;
mod construction;
mod delete_operations;
mod entries;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod testing;

pub use balance_operations::{max_entries_for_depth, min_depth_for};
pub use compact_arena::{CompactArena, CompactArenaStats};
pub use entries::{Entry, OrderedEntries};
pub use error::{BstError, BstResult, BstResultExt, InitResult, KeyResult, ModifyResult};
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use node::NodeRef;
pub use types::{BstMap, BstNode, Key, NodeId, ParentSlot, Side, Value, DEFAULT_CAPACITY};
