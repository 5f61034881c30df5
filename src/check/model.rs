//! Reference model
//!
//! A single `BTreeMap` keyed by the conceptual key `(slot, key)`. Slower and
//! unsharded, but obviously correct.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Conceptual key: `(slot, key)`
pub type ModelKey = (u64, u64);

#[derive(Debug)]
pub struct ReferenceModel {
    entries: BTreeMap<ModelKey, u64>,
    slot_count: u64,
}

impl ReferenceModel {
    pub fn new(slot_count: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            slot_count: slot_count as u64,
        }
    }

    fn conceptual(&self, shard: u64, key: u64) -> ModelKey {
        (shard % self.slot_count, key)
    }

    /// First value wins, like the map under test
    pub fn insert(&mut self, shard: u64, key: u64, value: u64) -> bool {
        match self.entries.entry(self.conceptual(shard, key)) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn erase(&mut self, shard: u64, key: u64) -> Option<u64> {
        let conceptual = self.conceptual(shard, key);
        self.entries.remove(&conceptual)
    }

    pub fn get(&self, shard: u64, key: u64) -> Option<u64> {
        self.entries.get(&self.conceptual(shard, key)).copied()
    }

    /// Smallest key `>= key` within the same slot
    pub fn seek(&self, shard: u64, key: u64) -> Option<(u64, u64)> {
        let (slot, key) = self.conceptual(shard, key);
        self.entries
            .range((slot, key)..=(slot, u64::MAX))
            .next()
            .map(|(&(_, found), &value)| (found, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with `start <= (slot, key) < end`, in order
    ///
    /// An inverted range is empty rather than a panic.
    pub fn scan(&self, start: ModelKey, end: ModelKey) -> Vec<(u64, u64, u64)> {
        if start >= end {
            return Vec::new();
        }
        self.entries
            .range(start..end)
            .map(|(&(slot, key), &value)| (slot, key, value))
            .collect()
    }

    pub fn all(&self) -> Vec<(u64, u64, u64)> {
        self.entries
            .iter()
            .map(|(&(slot, key), &value)| (slot, key, value))
            .collect()
    }
}
