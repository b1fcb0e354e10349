//! Node implementation for BstMap.
//!
//! Contains the `BstNode` accessors used by the tree algorithms and the
//! borrowed `NodeRef` view handed out to callers for introspection.

use std::fmt;

use crate::compact_arena::CompactArena;
use crate::types::{BstNode, Key, NodeId, ParentSlot, Side, Value};

// ============================================================================
// NODE IMPLEMENTATION
// ============================================================================

impl BstNode {
    /// Creates a detached node: no children, no parent slot.
    pub fn new(key: Key, value: Value) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<ParentSlot> {
        self.parent
    }

    /// The child hanging from `side`.
    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Number of present children (0, 1 or 2).
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// ============================================================================
// BORROWED NODE VIEW
// ============================================================================

/// Read-only view of a node inside a tree.
///
/// Exposes the key, value, children and parent slot, which is everything a
/// caller needs to walk or print the tree structure.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    arena: &'a CompactArena<BstNode>,
    id: NodeId,
    node: &'a BstNode,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(arena: &'a CompactArena<BstNode>, id: NodeId) -> Option<Self> {
        arena.get(id).map(|node| Self { arena, id, node })
    }

    /// Arena handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> Key {
        self.node.key
    }

    pub fn value(&self) -> Value {
        self.node.value
    }

    /// The slot in the parent this node hangs from, `None` for the root.
    pub fn parent_slot(&self) -> Option<ParentSlot> {
        self.node.parent
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.child(Side::Right)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a>> {
        self.node
            .child(side)
            .and_then(|id| NodeRef::new(self.arena, id))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node
            .parent
            .and_then(|slot| NodeRef::new(self.arena, slot.parent))
    }

    pub fn has_left(&self) -> bool {
        self.node.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.node.right.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &self.node.key)
            .field("value", &self.node.value)
            .field("left", &self.node.left)
            .field("right", &self.node.right)
            .finish()
    }
}
