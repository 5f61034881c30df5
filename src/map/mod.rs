//! BigMap Module
//!
//! A fixed number of lazily-created ordered maps ("slots") presenting one
//! conceptual ordered key space `(shard, key)`.
//!
//! ## Responsibilities
//! - Route every operation to slot `shard % S`
//! - Materialize a slot's map on first insert, never before
//! - Point lookups and lower-bound seeks inside one slot
//! - Range scans that cross slot boundaries in ascending `(slot, key)` order
//!
//! ## Layout
//! ```text
//!   BigMap<4, K, V>
//!   ┌────────┬────────┬────────┬────────┐
//!   │ slot 0 │ slot 1 │ slot 2 │ slot 3 │   Box<[Option<Box<BTreeMap>>]>
//!   └───┬────┴────────┴───┬────┴────────┘
//!       │     (None)      │     (None)
//!       ▼                 ▼
//!   BTreeMap<K,V>     BTreeMap<K,V>
//! ```
//!
//! ## Caller Obligations
//! The container never checks that shard indices were derived consistently
//! with the ordering a caller expects from range scans. A scan is always
//! ordered by `(slot, key)`; if two domain keys that should be adjacent land
//! in different slots the scan is still exhaustive, just not sorted by the
//! domain key.
//!
//! ## Concurrency
//! No internal locking. Mutation needs `&mut self`, so sharing across threads
//! means layering the caller's own synchronization on top.

mod iterator;
mod table;

pub use iterator::{RangeIter, SlotCursor};
pub use table::BigMap;
