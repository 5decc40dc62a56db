// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure passed through the predicates:
//! - Tier 1 (MEMO): the diagram, shared read-only behind an `Arc`
//! - Tier 2 (DYNAMIC): the current trial and the search statistics
//!
//! Several contexts can share one diagram, which is how the parallel search
//! runs independent trials.

use crate::geometry::{StrandId, EXTENDED_SEED_SIZE, SEED_SIZE};
use crate::memo::Diagram;
use crate::state::{ColorPartition, Statistics};
use std::sync::Arc;

/// The trial currently being examined (Tier 2: DYNAMIC).
///
/// Written by the seed triple predicate and read by the extension predicate.
/// Each new seed triple replaces the previous trial.
#[derive(Debug, Clone, Default)]
pub struct TrialState {
    /// The current seed triple.
    pub seeds: Option<[StrandId; SEED_SIZE]>,

    /// Strands left uncolored by the closure, in ascending order.
    /// Each is a candidate fourth seed.
    pub candidates: Vec<StrandId>,

    /// Four seeds whose closure colors every strand, once found.
    pub witness: Option<[StrandId; EXTENDED_SEED_SIZE]>,
}

impl TrialState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new trial from a conflicted seed triple.
    pub fn begin(&mut self, seeds: [StrandId; SEED_SIZE], partition: &ColorPartition) {
        self.candidates = partition.uncolored().collect();
        self.seeds = Some(seeds);
    }
}

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     diagram: Arc<Diagram>,    // Tier 1: Immutable, shared
///     state: TrialState,        // Tier 2: Mutable, owned
///     statistics: Statistics,   // Tier 2: Mutable, owned
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Immutable diagram data.
    pub diagram: Arc<Diagram>,

    /// The current trial.
    pub state: TrialState,

    /// Counters for the whole search.
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context with an empty trial and zeroed statistics.
    pub fn new(diagram: Arc<Diagram>) -> Self {
        Self {
            diagram,
            state: TrialState::new(),
            statistics: Statistics::new(),
        }
    }
}
