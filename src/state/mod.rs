// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one trial or one search).
//!
//! - ColorPartition: the coloring grown from one seed set
//! - Statistics: counters kept across all trials of a search
//!
//! Each trial starts from a fresh partition, so nothing here needs undoing
//! when the search moves on to the next seed set.

pub mod partition;
pub mod statistics;

pub use partition::ColorPartition;
pub use statistics::{Counters, Statistics};
