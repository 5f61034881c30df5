//! BigMap cursors
//!
//! `SlotCursor` is a position inside a single slot. `RangeIter` chains slot
//! iteration and crosses slot boundaries on its own, skipping unallocated and
//! empty slots.
//!
//! ## RangeIter States
//! ```text
//!   construction ──► Valid ──advance()──► Valid
//!        │             │
//!        │             └──advance()──► Exhausted (terminal)
//!        └───────────────────────────► Exhausted
//! ```

use std::collections::btree_map::Range;
use std::iter::{Chain, FusedIterator, Once};
use std::ops::Bound;

use super::table::BigMap;

// =============================================================================
// SlotCursor
// =============================================================================

/// Position of an existing entry inside one slot
///
/// Iterating a cursor yields its entry followed by the rest of the slot; it
/// never crosses into the next slot.
pub struct SlotCursor<'a, K, V> {
    current: (&'a K, &'a V),
    rest: Range<'a, K, V>,
}

impl<'a, K, V> SlotCursor<'a, K, V> {
    /// `None` when `range` is empty
    pub(crate) fn new(mut range: Range<'a, K, V>) -> Option<Self> {
        let current = range.next()?;
        Some(Self { current, rest: range })
    }

    pub fn key(&self) -> &'a K {
        self.current.0
    }

    pub fn value(&self) -> &'a V {
        self.current.1
    }
}

impl<'a, K, V> IntoIterator for SlotCursor<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Chain<Once<(&'a K, &'a V)>, Range<'a, K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.current).chain(self.rest)
    }
}

// =============================================================================
// RangeIter
// =============================================================================

/// Forward cursor over a half-open range of the `(slot, key)` key space
///
/// Built by [`BigMap::get_iterator`] or [`BigMap::iter`]. Once exhausted it
/// stays exhausted.
pub struct RangeIter<'a, const S: usize, K, V> {
    map: &'a BigMap<S, K, V>,

    /// Slot holding `current`
    curr_slot: usize,

    /// Last slot the scan may visit (inclusive)
    end_slot: usize,

    /// Keys in `end_slot` must be strictly below this; `None` = no bound
    end_key: Option<K>,

    /// Entries after `current` in `curr_slot`
    rest: Option<Range<'a, K, V>>,

    /// Entry under the cursor; `None` once exhausted
    current: Option<(&'a K, &'a V)>,
}

impl<'a, const S: usize, K: Ord, V> RangeIter<'a, S, K, V> {
    pub(crate) fn new(
        map: &'a BigMap<S, K, V>,
        start_slot: usize,
        start_key: Option<&K>,
        end_slot: usize,
        end_key: Option<K>,
    ) -> Self {
        let rest = map.slot(start_slot).map(|slot_map| match start_key {
            Some(key) => slot_map.range::<K, _>((Bound::Included(key), Bound::Unbounded)),
            None => slot_map.range::<K, _>(..),
        });

        let mut iter = Self {
            map,
            curr_slot: start_slot,
            end_slot,
            end_key,
            rest,
            current: None,
        };
        iter.settle();
        iter
    }

    pub(crate) fn exhausted(map: &'a BigMap<S, K, V>) -> Self {
        Self {
            map,
            curr_slot: 0,
            end_slot: 0,
            end_key: None,
            rest: None,
            current: None,
        }
    }

    // =========================================================================
    // Cursor API
    // =========================================================================

    /// Whether the cursor rests on an entry inside the range
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    pub fn key(&self) -> Option<&'a K> {
        self.current.map(|(key, _)| key)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.current.map(|(_, value)| value)
    }

    /// Slot position of the current entry
    pub fn shard(&self) -> Option<usize> {
        self.current.map(|_| self.curr_slot)
    }

    /// Move to the next entry in range; no-op once exhausted
    pub fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.settle();
    }

    // =========================================================================
    // Slot Crossing
    // =========================================================================

    /// Pull the next entry, crossing slots as needed, then apply the end bound
    fn settle(&mut self) {
        self.current = self.rest.as_mut().and_then(Iterator::next);

        while self.current.is_none() {
            self.curr_slot += 1;
            if self.curr_slot > self.end_slot {
                break;
            }
            // Unallocated slots hold nothing; skip them.
            if let Some(slot_map) = self.map.slot(self.curr_slot) {
                let mut range = slot_map.range::<K, _>(..);
                self.current = range.next();
                self.rest = Some(range);
            }
        }

        if let Some((key, _)) = self.current {
            let past_end = self.curr_slot > self.end_slot
                || (self.curr_slot == self.end_slot
                    && self.end_key.as_ref().is_some_and(|end| key >= end));
            if past_end {
                self.current = None;
            }
        }

        if self.current.is_none() {
            self.rest = None;
            tracing::trace!(slot = self.curr_slot, "range scan exhausted");
        }
    }
}

impl<'a, const S: usize, K: Ord, V> Iterator for RangeIter<'a, S, K, V> {
    /// `(slot, key, value)`
    type Item = (usize, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.current?;
        let slot = self.curr_slot;
        self.advance();
        Some((slot, key, value))
    }
}

impl<'a, const S: usize, K: Ord, V> FusedIterator for RangeIter<'a, S, K, V> {}
