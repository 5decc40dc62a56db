// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The width search.
//!
//! For each seed triple (in lexicographic order) the coloring is propagated
//! to its fixed point. A triple whose closure has a multicolored crossing is
//! then extended by each uncolored strand in turn as a fourth seed. The first
//! four-seed closure that colors every strand ends the search with the
//! reduced bound; if none exists the general bound applies.
//!
//! The sequential search runs as a predicate program on the engine. With the
//! `rayon` feature, [`WidthSearch::run_parallel`] evaluates triples on a
//! thread pool and stops at whichever success it sees first.

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::{DiagramError, Result};
use crate::geometry::{GaussCode, StrandId, WidthBound, EXTENDED_SEED_SIZE, MIN_STRANDS};
use crate::memo::Diagram;
use crate::predicates::{ExtensionPredicate, SeedTriplePredicate, SuspendPredicate};
use crate::state::Statistics;
use std::sync::Arc;

/// Outcome of a width search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub bound: WidthBound,

    /// Four seeds whose closure covers every strand; present exactly when
    /// the bound is reduced.
    pub witness: Option<[StrandId; EXTENDED_SEED_SIZE]>,

    pub statistics: Statistics,
}

impl SearchReport {
    fn new(witness: Option<[StrandId; EXTENDED_SEED_SIZE]>, statistics: Statistics) -> Self {
        let bound = if witness.is_some() {
            WidthBound::Reduced
        } else {
            WidthBound::General
        };
        Self {
            bound,
            witness,
            statistics,
        }
    }
}

/// Width search over one diagram.
#[derive(Debug, Clone)]
pub struct WidthSearch {
    diagram: Arc<Diagram>,
}

impl WidthSearch {
    /// Prepare a search. Diagrams with fewer than 3 strands have no seed
    /// triple and are rejected.
    pub fn new(diagram: impl Into<Arc<Diagram>>) -> std::result::Result<Self, DiagramError> {
        let diagram = diagram.into();
        let count = diagram.strand_count();
        if count < MIN_STRANDS {
            return Err(DiagramError::TooFewStrands { count });
        }
        Ok(Self { diagram })
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Run the search sequentially, stopping at the first covering extension.
    pub fn run(&self) -> SearchReport {
        tracing::info!(strands = self.diagram.strand_count(), "width search");

        let mut ctx = SearchContext::new(Arc::clone(&self.diagram));
        let engine = EngineBuilder::new()
            .add(Box::new(SeedTriplePredicate::new()))
            .add(Box::new(ExtensionPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let witness = match engine.search(&mut ctx) {
            Some(engine) => {
                let (tries, retries) = engine.statistics();
                tracing::debug!(tries, retries, "engine suspended");
                ctx.state.witness
            }
            None => None,
        };
        let report = SearchReport::new(witness, ctx.statistics);
        log_report(&report);
        report
    }

    /// Run the search on the rayon thread pool.
    ///
    /// Gives the same bound as [`run`](Self::run). The witness may differ,
    /// and the statistics cover whatever trials ran before the pool stopped.
    /// Build with `--features rayon` to enable it.
    #[cfg(feature = "rayon")]
    pub fn run_parallel(&self) -> SearchReport {
        use crate::predicates::{extension_trial, seed_trial, SeedTriples};
        use rayon::prelude::*;
        use std::sync::{Mutex, PoisonError};

        tracing::info!(strands = self.diagram.strand_count(), "parallel width search");

        let diagram: &Diagram = &self.diagram;
        let totals = Mutex::new(Statistics::new());
        let witness = SeedTriples::new(diagram.strand_count())
            .par_bridge()
            .find_map_any(|seeds| {
                let mut statistics = Statistics::new();
                let found = seed_trial(diagram, seeds, &mut statistics).and_then(|partition| {
                    partition.uncolored().find_map(|fourth| {
                        extension_trial(diagram, seeds, fourth, &mut statistics)
                    })
                });
                if let Ok(mut totals) = totals.lock() {
                    totals.merge(&statistics);
                }
                found
            });

        let statistics = totals.into_inner().unwrap_or_else(PoisonError::into_inner);
        let report = SearchReport::new(witness, statistics);
        log_report(&report);
        report
    }

    /// Without the `rayon` feature this is the sequential search.
    #[cfg(not(feature = "rayon"))]
    pub fn run_parallel(&self) -> SearchReport {
        tracing::warn!("built without the rayon feature; searching sequentially");
        self.run()
    }
}

fn log_report(report: &SearchReport) {
    tracing::info!(
        bound = %report.bound,
        witness = ?report.witness,
        statistics = %report.statistics,
        "search complete"
    );
}

/// Parse a Gauss code, build its diagram and search it.
///
/// ```
/// use gabai_width::{compute_width_bound, WidthBound};
///
/// let bound = compute_width_bound(["-1,", "2,", "-3,", "1,", "-2,", "3"]).unwrap();
/// assert_eq!(bound, WidthBound::General);
/// assert_eq!(bound.to_string(), "32");
/// ```
pub fn compute_width_bound<I, S>(tokens: I) -> Result<WidthBound>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let code = GaussCode::from_tokens(tokens)?;
    let diagram = Diagram::build(code)?;
    Ok(WidthSearch::new(diagram)?.run().bound)
}
