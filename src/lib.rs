// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Upper bound on the Gabai width of a knot diagram with Wirtinger number four.
//!
//! Given the Gauss code of a diagram, the crate decides between the bounds
//! 28 and 32 by looking for a four-strand seed set whose color propagation
//! covers every strand of the diagram.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once per Gauss code and shared by every trial:
//! - Strands, each running from one under-pass to the next
//! - For each strand, the crossings it passes over and their two under-strands
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Per-trial state, rebuilt for each seed set:
//! - ColorPartition - which strand carries which seed's color
//! - Statistics - counters for the whole search
//!
//! # Search Algorithm
//!
//! The search runs as a predicate program on a backtracking engine:
//!
//! 1. **SeedTriplePredicate**: each 3-subset of strands, in lexicographic
//!    order, is propagated to its fixed point; triples without a multicolored
//!    crossing are skipped
//! 2. **ExtensionPredicate**: each uncolored strand is tried as a fourth seed
//! 3. **SuspendPredicate**: reached when a four-seed coloring covers every
//!    strand, giving the bound 28
//!
//! Exhausting the program gives the bound 32.
//!
//! # Example
//!
//! ```
//! use gabai_width::{compute_width_bound, WidthBound};
//!
//! let bound = compute_width_bound("1 -2 3 -1 2 -4 5 -3 4 -5".split(' ')).unwrap();
//! assert_eq!(bound, WidthBound::Reduced);
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod predicates;
pub mod propagation;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{DiagramError, ParseError, Result, WidthError};
pub use geometry::{GaussCode, StrandId, WidthBound};
pub use memo::Diagram;
pub use search::{compute_width_bound, SearchReport, WidthSearch};
