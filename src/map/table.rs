//! BigMap implementation
//!
//! Boxed slice of optional slot maps, each a `BTreeMap`.

use std::borrow::Borrow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound;

use super::iterator::{RangeIter, SlotCursor};

/// Sharded ordered map with `S` slots
///
/// The conceptual key of an entry is `(shard, key)`; the entry lives in slot
/// `shard % S`. Within a slot keys are unique and the first inserted value
/// wins.
///
/// ## Ownership
/// The slot array lives on the heap, so the handle itself is one pointer
/// wide. `BigMap` does not implement `Clone`: there is exactly one owner of
/// every slot map, and a live [`RangeIter`] borrows the map so it cannot be
/// moved or mutated mid-scan.
#[derive(Debug)]
pub struct BigMap<const S: usize, K, V> {
    /// `None` = slot never written, no map allocated
    slots: Box<[Option<Box<BTreeMap<K, V>>>]>,
}

impl<const S: usize, K: Ord, V> BigMap<S, K, V> {
    const SLOT_CHECK: () = assert!(S > 0, "BigMap needs at least one slot");

    /// Number of slots
    pub const SLOT_COUNT: usize = S;

    /// Create a map with every slot unallocated
    pub fn new() -> Self {
        let () = Self::SLOT_CHECK;
        Self {
            slots: (0..S).map(|_| None).collect(),
        }
    }

    /// Slot position that stores entries for `shard`
    pub fn slot_of(shard: u64) -> usize {
        (shard % S as u64) as usize
    }

    // =========================================================================
    // Slot Access
    // =========================================================================

    pub(crate) fn slot(&self, slot: usize) -> Option<&BTreeMap<K, V>> {
        self.slots.get(slot).and_then(|map| map.as_deref())
    }

    fn slot_or_create(&mut self, slot: usize) -> &mut BTreeMap<K, V> {
        self.slots[slot].get_or_insert_with(|| {
            tracing::trace!(slot, "materializing slot map");
            Box::default()
        })
    }

    // =========================================================================
    // Point Operations
    // =========================================================================

    /// Insert `(key, value)` into the slot for `shard`
    ///
    /// An existing entry for `key` is left untouched. Returns whether the
    /// entry was added.
    pub fn insert(&mut self, shard: u64, key: K, value: V) -> bool {
        match self.slot_or_create(Self::slot_of(shard)).entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Remove `key` from the slot for `shard`
    ///
    /// Missing keys and unallocated slots are a silent no-op (`None`).
    pub fn erase<Q>(&mut self, shard: u64, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.slots[Self::slot_of(shard)].as_mut()?.remove(key)
    }

    /// Exact lookup inside the slot for `shard`
    pub fn get<Q>(&self, shard: u64, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.slot(Self::slot_of(shard))?.get(key)
    }

    pub fn contains<Q>(&self, shard: u64, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(shard, key).is_some()
    }

    /// Position of the smallest key `>= key` in the slot for `shard`
    ///
    /// Does not look past the end of that slot: `None` when the slot is
    /// unallocated or holds no such key.
    pub fn seek<Q>(&self, shard: u64, key: &Q) -> Option<SlotCursor<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let map = self.slot(Self::slot_of(shard))?;
        SlotCursor::new(map.range::<Q, _>((Bound::Included(key), Bound::Unbounded)))
    }

    // =========================================================================
    // Range Scans
    // =========================================================================

    /// Cursor over `[(start_shard, start_key), (end_shard, end_key))`
    ///
    /// Shards here are slot positions, not reduced modulo `S`. A start past
    /// the last slot or after `end_shard` yields an exhausted cursor. An
    /// `end_shard` past the last slot scans every remaining entry.
    pub fn get_iterator(
        &self,
        start_shard: u64,
        start_key: &K,
        end_shard: u64,
        end_key: K,
    ) -> RangeIter<'_, S, K, V> {
        let last = S as u64 - 1;
        let (end_slot, end_key) = if end_shard > last {
            (last, None)
        } else {
            (end_shard, Some(end_key))
        };

        if start_shard > end_slot {
            return RangeIter::exhausted(self);
        }

        RangeIter::new(self, start_shard as usize, Some(start_key), end_slot as usize, end_key)
    }

    /// Every entry in ascending `(slot, key)` order
    pub fn iter(&self) -> RangeIter<'_, S, K, V> {
        RangeIter::new(self, 0, None, S - 1, None)
    }

    // =========================================================================
    // Accounting
    // =========================================================================

    /// Total entries across all allocated slots
    pub fn size(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .map(|map| map.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(|map| map.is_empty())
    }

    /// Number of slots that have a map allocated
    pub fn allocated_slots(&self) -> usize {
        self.slots.iter().filter(|map| map.is_some()).count()
    }

    /// Entries stored in the slot for `shard`
    pub fn slot_len(&self, shard: u64) -> usize {
        self.slot(Self::slot_of(shard)).map_or(0, BTreeMap::len)
    }

    /// Drop every slot map, returning all slots to the unallocated state
    pub fn clear(&mut self) {
        let released = self.allocated_slots();
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        tracing::debug!(released, "released slot maps");
    }
}

impl<const S: usize, K: Ord, V> Default for BigMap<S, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const S: usize, K: Ord, V> IntoIterator for &'a BigMap<S, K, V> {
    type Item = (usize, &'a K, &'a V);
    type IntoIter = RangeIter<'a, S, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
