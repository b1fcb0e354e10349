//! Generational arena that owns every node of a tree.
//!
//! Items are stored directly in a `Vec<T>` with a separate allocation mask and
//! free list. Each slot carries a generation counter that is bumped whenever
//! the slot is released, so a `NodeId` kept across a removal stops resolving
//! instead of silently aliasing whatever reuses the slot.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Handle to an item stored in a [`CompactArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index inside the arena.
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Generation of the slot when this id was handed out.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Arena allocator with a free list and per-slot generation tracking.
#[derive(Debug, Clone)]
pub struct CompactArena<T> {
    /// Direct storage, one item per slot
    storage: Vec<T>,
    /// Current generation of every slot ever handed out; survives `clear`
    generations: Vec<u32>,
    /// Which slots are live
    allocated_mask: Vec<bool>,
    /// Released slot indices for reuse
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> CompactArena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new arena with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
            allocated_mask: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its id
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            if index == self.generations.len() {
                self.generations.push(0);
            }
            index
        };
        self.allocated += 1;

        NodeId {
            // Slot counts beyond u32::MAX exhaust memory long before this wraps.
            index: index as u32,
            generation: self.generations[index],
        }
    }

    /// Check if an id refers to a live item of the current generation
    pub fn contains(&self, id: NodeId) -> bool {
        let index = id.index();
        index < self.storage.len()
            && self.allocated_mask[index]
            && self.generations[index] == id.generation
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if self.contains(id) {
            Some(&self.storage[id.index()])
        } else {
            None
        }
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if self.contains(id) {
            Some(&mut self.storage[id.index()])
        } else {
            None
        }
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.allocated
    }

    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Total slot capacity of the backing storage
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Get the number of released slots waiting for reuse
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Iterate over the ids of all live items, in slot order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.allocated_mask
            .iter()
            .enumerate()
            .filter(|(_, allocated)| **allocated)
            .map(|(index, _)| NodeId {
                index: index as u32,
                generation: self.generations[index],
            })
    }

    /// Release every item. Ids handed out before the call no longer resolve.
    pub fn clear(&mut self) {
        for generation in self.generations.iter_mut().take(self.storage.len()) {
            *generation = generation.wrapping_add(1);
        }
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }
}

impl<T: Default> CompactArena<T> {
    /// Release an item and return it. The slot's generation is bumped so the
    /// released id can never resolve again.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }

        let index = id.index();
        self.allocated_mask[index] = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push(index);
        self.allocated -= 1;

        Some(std::mem::take(&mut self.storage[index]))
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for CompactArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("arena access through stale or unallocated id {id}"),
        }
    }
}

impl<T> IndexMut<NodeId> for CompactArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("arena access through stale or unallocated id {id}"),
        }
    }
}
