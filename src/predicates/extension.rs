// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fourth-seed extension of a conflicted triple.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::{StrandId, EXTENDED_SEED_SIZE, SEED_SIZE};
use crate::memo::Diagram;
use crate::predicates::seeds::format_seeds;
use crate::propagation::maximally_extend;
use crate::state::{Counters, Statistics};

/// Add `fourth` to the seed triple and propagate from all four seeds.
///
/// Returns the four seeds when their closure colors every strand.
pub fn extension_trial(
    diagram: &Diagram,
    seeds: [StrandId; SEED_SIZE],
    fourth: StrandId,
    statistics: &mut Statistics,
) -> Option<[StrandId; EXTENDED_SEED_SIZE]> {
    let [a, b, c] = seeds;
    let extended = [a, b, c, fourth];
    let partition = maximally_extend(diagram, &extended);

    statistics.increment(Counters::Extensions);
    statistics.increment(Counters::Propagations);
    statistics.add(
        Counters::Assignments,
        (partition.colored_count() - EXTENDED_SEED_SIZE) as u64,
    );
    tracing::debug!(
        seeds = %format_seeds(&extended),
        colored = partition.colored_count(),
        strands = partition.strand_count(),
        "extension"
    );

    partition.is_complete().then_some(extended)
}

/// Tries each uncolored strand of the current trial as a fourth seed.
///
/// Succeeds on the first fourth seed whose closure covers the diagram,
/// recording it as the witness.
#[derive(Debug)]
pub struct ExtensionPredicate;

impl Predicate for ExtensionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        match ctx.state.candidates.len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        let (Some(seeds), Some(&fourth)) = (ctx.state.seeds, ctx.state.candidates.get(choice))
        else {
            return PredicateResult::Failure;
        };
        match extension_trial(&ctx.diagram, seeds, fourth, &mut ctx.statistics) {
            Some(witness) => {
                ctx.state.witness = Some(witness);
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Extension"
    }
}
