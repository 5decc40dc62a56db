// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seed triples.
//!
//! Every size-3 subset of the strands is a candidate set of seeds. Subsets
//! are produced lazily in lexicographic order of strand index, so a search
//! that stops early never materializes the rest.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::{seed_triple_count, StrandId, SEED_SIZE};
use crate::memo::Diagram;
use crate::propagation::{count_multicolored_crossings, maximally_extend};
use crate::state::{ColorPartition, Counters, Statistics};

/// Lexicographic iterator over the size-3 subsets of `0..n`.
///
/// ```
/// use gabai_width::predicates::SeedTriples;
///
/// let triples: Vec<_> = SeedTriples::new(4)
///     .map(|t| t.map(|s| s.as_usize()))
///     .collect();
/// assert_eq!(triples, vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct SeedTriples {
    n: usize,
    next: Option<[usize; SEED_SIZE]>,
}

impl SeedTriples {
    pub fn new(n: usize) -> Self {
        let next = (n >= SEED_SIZE).then_some([0, 1, 2]);
        Self { n, next }
    }

    /// The subset after `current`, if any.
    fn advance(&self, mut current: [usize; SEED_SIZE]) -> Option<[usize; SEED_SIZE]> {
        // Rightmost slot that can still move up.
        let slot = (0..SEED_SIZE)
            .rev()
            .find(|&i| current[i] < self.n - SEED_SIZE + i)?;
        current[slot] += 1;
        for i in slot + 1..SEED_SIZE {
            current[i] = current[i - 1] + 1;
        }
        Some(current)
    }
}

impl Iterator for SeedTriples {
    type Item = [StrandId; SEED_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(current.map(StrandId::new))
    }
}

/// Propagate one seed triple and check it for conflicts.
///
/// Returns the closure when it has at least one multicolored crossing;
/// conflict-free triples give `None`.
pub fn seed_trial(
    diagram: &Diagram,
    seeds: [StrandId; SEED_SIZE],
    statistics: &mut Statistics,
) -> Option<ColorPartition> {
    let partition = maximally_extend(diagram, &seeds);
    let conflicts = count_multicolored_crossings(&partition, diagram);

    statistics.increment(Counters::SeedTriples);
    statistics.increment(Counters::Propagations);
    statistics.add(
        Counters::Assignments,
        (partition.colored_count() - SEED_SIZE) as u64,
    );
    tracing::debug!(
        seeds = %format_seeds(&seeds),
        closure = %partition,
        conflicts,
        "seed triple"
    );

    if conflicts == 0 {
        return None;
    }
    statistics.increment(Counters::ConflictedTriples);
    Some(partition)
}

pub(crate) fn format_seeds(seeds: &[StrandId]) -> String {
    seeds
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Chooses each seed triple in turn.
///
/// Offers one choice per seed triple. A choice succeeds when its closure is
/// conflicted, leaving the trial in `ctx.state` for the extension predicate.
#[derive(Debug, Default)]
pub struct SeedTriplePredicate {
    triples: Option<SeedTriples>,
}

impl SeedTriplePredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for SeedTriplePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let n = ctx.diagram.strand_count();
        self.triples = Some(SeedTriples::new(n));
        match seed_triple_count(n) {
            0 => PredicateResult::Failure,
            count => PredicateResult::Choices(count),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
        // Choices arrive in ascending order, one per triple.
        let Some(seeds) = self.triples.as_mut().and_then(Iterator::next) else {
            return PredicateResult::Failure;
        };
        match seed_trial(&ctx.diagram, seeds, &mut ctx.statistics) {
            Some(partition) => {
                ctx.state.begin(seeds, &partition);
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "SeedTriple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GaussCode;
    use std::sync::Arc;

    fn triples(n: usize) -> Vec<[usize; 3]> {
        SeedTriples::new(n)
            .map(|t| t.map(StrandId::as_usize))
            .collect()
    }

    fn context(entries: &[i32]) -> SearchContext {
        let code = GaussCode::from_entries(entries.to_vec());
        SearchContext::new(Arc::new(Diagram::build(code).unwrap()))
    }

    #[test]
    fn test_lexicographic_order() {
        let all = triples(5);
        assert_eq!(all.len(), seed_triple_count(5));
        assert_eq!(&all[..3], &[[0, 1, 2], [0, 1, 3], [0, 1, 4]]);
        assert_eq!(all.last(), Some(&[2, 3, 4]));
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_small_counts() {
        assert!(triples(0).is_empty());
        assert!(triples(2).is_empty());
        assert_eq!(triples(3), vec![[0, 1, 2]]);
        assert_eq!(triples(9).len(), 84);
    }

    #[test]
    fn test_conflict_free_triple_is_skipped() {
        // Strands 0, 2 and 4 pass over nothing, so their colors never spread.
        let diagram = context(&[1, -5, -2, 4, 2, 6, 3, -1, -4, -3, -6, 5]).diagram;
        let mut stats = Statistics::new();
        let seeds = [StrandId::new(0), StrandId::new(2), StrandId::new(4)];
        assert!(seed_trial(&diagram, seeds, &mut stats).is_none());
        assert_eq!(stats.get(Counters::SeedTriples), 1);
        assert_eq!(stats.get(Counters::ConflictedTriples), 0);
        assert_eq!(stats.get(Counters::Assignments), 0);
    }

    #[test]
    fn test_conflicted_triple_is_kept() {
        let diagram = context(&[1, -2, 3, -4, 5, -1, 2, -3, 4, -5]).diagram;
        let mut stats = Statistics::new();
        let seeds = [StrandId::new(0), StrandId::new(1), StrandId::new(2)];
        let partition = seed_trial(&diagram, seeds, &mut stats).unwrap();
        assert!(partition.is_complete());
        assert_eq!(stats.get(Counters::ConflictedTriples), 1);
        assert_eq!(stats.get(Counters::Assignments), 2);
    }

    #[test]
    fn test_predicate_walks_triples() {
        let mut ctx = context(&[1, -2, 3, -1, 2, -4, 5, -3, 4, -5]);
        let mut pred = SeedTriplePredicate::new();
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Choices(10));

        // (0, 1, 2) closes over every strand but conflicts.
        assert_eq!(pred.retry_pred(&mut ctx, 0), PredicateResult::Success);
        assert!(ctx.state.candidates.is_empty());

        assert_eq!(pred.retry_pred(&mut ctx, 1), PredicateResult::Success);
        assert_eq!(pred.retry_pred(&mut ctx, 2), PredicateResult::Success);
        assert_eq!(
            ctx.state.seeds,
            Some([StrandId::new(0), StrandId::new(1), StrandId::new(4)])
        );
        assert_eq!(ctx.state.candidates, vec![StrandId::new(2), StrandId::new(3)]);
        assert_eq!(ctx.statistics.get(Counters::Propagations), 3);
    }

    #[test]
    fn test_too_few_strands_fails() {
        // Two strands: (-1, 2, -2) and (-2, 1, -1).
        let mut ctx = context(&[-1, 2, -2, 1]);
        let mut pred = SeedTriplePredicate::new();
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Failure);
    }
}
