//! Ordered entry sequences.
//!
//! `OrderedEntries` is the sorted snapshot produced by an in-order traversal
//! and consumed by the balanced builder. It tracks length and capacity
//! explicitly and doubles its capacity when a push overflows it.

use std::ops::Index;

use crate::types::{Key, Value};

/// One key-value pair of a tree snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

impl Entry {
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }
}

impl From<(Key, Value)> for Entry {
    fn from((key, value): (Key, Value)) -> Self {
        Self { key, value }
    }
}

impl From<Entry> for (Key, Value) {
    fn from(entry: Entry) -> Self {
        (entry.key, entry.value)
    }
}

/// Growable, capacity-tracked sequence of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedEntries {
    entries: Vec<Entry>,
}

impl OrderedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry, doubling the capacity when full.
    pub fn push(&mut self, key: Key, value: Value) {
        if self.entries.len() == self.entries.capacity() {
            let additional = self.entries.capacity().max(1);
            self.entries.reserve_exact(additional);
        }
        self.entries.push(Entry { key, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    /// Index of the first entry whose key is not strictly greater than its
    /// predecessor's, or `None` if the sequence is strictly ascending.
    pub fn first_unordered(&self) -> Option<usize> {
        first_unordered(&self.entries)
    }

    pub fn into_vec(self) -> Vec<Entry> {
        self.entries
    }
}

pub(crate) fn first_unordered(entries: &[Entry]) -> Option<usize> {
    entries
        .windows(2)
        .position(|pair| pair[0].key >= pair[1].key)
        .map(|position| position + 1)
}

impl Index<usize> for OrderedEntries {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a OrderedEntries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for OrderedEntries {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(Key, Value)> for OrderedEntries {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (key, value) in iter {
            entries.push(key, value);
        }
        entries
    }
}

impl From<Vec<Entry>> for OrderedEntries {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
