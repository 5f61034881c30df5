//! Check Module
//!
//! Randomized differential testing of `BigMap` against a flat reference map.
//!
//! ## Round Structure
//! 1. Start from an empty map and an empty model
//! 2. Apply `ops_per_round` random inserts, erases, lookups, and seeks to
//!    both, comparing every result
//! 3. Compare `size()` and a full traversal
//! 4. Compare `scans_per_round` random range scans, including bounds past
//!    the last slot and inverted ranges
//!
//! A run is fully determined by its `CheckConfig`, seed included.

mod checker;
mod model;

pub use checker::{CheckReport, Checker, RoundStats, CHECK_SLOTS};
pub use model::ReferenceModel;
