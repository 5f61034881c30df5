//! # BigMap
//!
//! A sharded, ordered, in-memory key-value container for indexers that hold
//! very large numbers of entries:
//! - Fixed number of independently allocated ordered slot maps
//! - One conceptual ordered key space `(shard, key)`
//! - Range scans that cross slot boundaries transparently
//! - Padding-free fixed-width integers for dense keys and values
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Caller (indexer)                            │
//! │        derives shard index from a domain key                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ (shard, key[, value])
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      BigMap<S, K, V>                         │
//! │                slot = shard % S, lazy slots                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Slot maps  │◄─────────│  RangeIter  │
//!   │  (BTreeMap) │          │ (crossing)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bigmap::{BigMap, Int40};
//!
//! let mut map: BigMap<4, Int40, &str> = BigMap::new();
//! map.insert(1, Int40::from_u64(5), "a");
//! map.insert(1, Int40::from_u64(9), "b");
//! map.insert(3, Int40::from_u64(2), "c");
//!
//! assert_eq!(map.get(1, &Int40::from_u64(5)), Some(&"a"));
//! assert_eq!(map.size(), 3);
//!
//! let values: Vec<_> = map
//!     .get_iterator(1, &Int40::from_u64(5), 3, Int40::from_u64(2))
//!     .map(|(_, _, value)| *value)
//!     .collect();
//! assert_eq!(values, ["a", "b"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod compact;
pub mod map;
pub mod check;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BigMapError, Result};
pub use config::CheckConfig;
pub use compact::{CompactInteger, Int24, Int32, Int40, Int48, Int56, Int64};
pub use map::{BigMap, RangeIter, SlotCursor};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of BigMap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
