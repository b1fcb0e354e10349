//! Core types and data structures for BstMap.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the binary search tree implementation.

use crate::compact_arena::CompactArena;

pub use crate::compact_arena::NodeId;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Key type. Keys are unique within a tree and define its total order.
pub type Key = i32;

/// Value type stored alongside each key.
pub type Value = i32;

/// Default number of node slots reserved by [`BstMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Non-owning locator of the slot in a parent through which a node is
/// reachable.
///
/// Only ever used to patch that slot during restructuring. Memory is owned
/// by the arena, never released through a parent slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentSlot {
    pub parent: NodeId,
    pub side: Side,
}

impl ParentSlot {
    pub fn new(parent: NodeId, side: Side) -> Self {
        Self { parent, side }
    }

    pub fn left_of(parent: NodeId) -> Self {
        Self::new(parent, Side::Left)
    }

    pub fn right_of(parent: NodeId) -> Self {
        Self::new(parent, Side::Right)
    }
}

/// A single key-value entry of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BstNode {
    pub(crate) key: Key,
    pub(crate) value: Value,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// `None` for the root and for freshly created, detached nodes.
    pub(crate) parent: Option<ParentSlot>,
}

/// Binary search tree map over integer keys and values.
///
/// Nodes live in a generational arena owned by the map. Each node records the
/// parent slot it hangs from, so deletion can re-link a replacement in O(1)
/// without searching from the root again.
///
/// The tree never rebalances itself. Skewed insertion orders produce skewed
/// trees; [`BstMap::balance`] rebuilds a minimum-depth tree on demand.
///
/// # Examples
///
/// ```
/// use bstmap::BstMap;
///
/// let mut tree = BstMap::new();
/// tree.insert(6, 60);
/// tree.insert(2, 20);
/// tree.insert(9, 90);
///
/// assert_eq!(tree.search(2), Some(&20));
/// assert_eq!(tree.search(5), None);
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.find_min().map(|n| n.key()), Some(2));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion / lookup / deletion**: O(depth), O(n) worst case when skewed
/// - **Traversal**: O(n)
/// - **Balance / rebuild**: O(n), resulting depth ⌈log₂(n+1)⌉
#[derive(Debug, Clone)]
pub struct BstMap {
    /// Arena owning every node of the tree.
    pub(crate) arena: CompactArena<BstNode>,
    /// The root node, `None` for the empty tree.
    pub(crate) root: Option<NodeId>,
    /// Number of entries reachable from the root.
    pub(crate) len: usize,
}
