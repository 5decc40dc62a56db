// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color propagation over the crossing relation.
//!
//! This module grows a seed coloring to its maximal extension.
//!
//! # Algorithm Overview
//!
//! Repeat full passes until a pass colors nothing:
//! 1. Visit every colored strand (colors in seed order, members in the order
//!    they were colored, including strands colored earlier in the same pass)
//! 2. For each crossing that strand passes over, look at the two under-strands
//! 3. If exactly one of them is colored, give the other one the same color
//!
//! A crossing whose under-strands are both colored is left alone, whether the
//! colors agree or not. Such conflicts are never resolved here; they are
//! counted afterwards by [`conflicts`]. This is why the closure is not a
//! union-find: merging both-colored crossings would erase the very signal the
//! search depends on.
//!
//! # Termination
//!
//! Every assignment colors a previously uncolored strand, so there are at
//! most `strand_count` assignments and at most `strand_count + 1` passes.

pub mod conflicts;

use crate::geometry::{Crossing, StrandId};
use crate::memo::Diagram;
use crate::state::ColorPartition;

pub use conflicts::{count_multicolored_crossings, is_multicolored, multicolored_crossings};

/// Color the seeds and extend the coloring to its fixed point.
///
/// Seed `i` gets color `i`.
pub fn maximally_extend(diagram: &Diagram, seeds: &[StrandId]) -> ColorPartition {
    let mut partition = ColorPartition::new(seeds, diagram.strand_count());
    let assignments = extend(diagram, &mut partition);
    tracing::trace!(
        seeds = ?seeds,
        assignments,
        colored = partition.colored_count(),
        "maximal extension"
    );
    partition
}

/// Extend `partition` in place until no crossing can color another strand.
///
/// Returns the number of strands colored. On a partition that is already a
/// fixed point this is 0.
pub fn extend(diagram: &Diagram, partition: &mut ColorPartition) -> usize {
    let mut assignments = 0;
    loop {
        let mut pass = 0;
        for color in partition.colors() {
            let mut k = 0;
            while k < partition.members(color).len() {
                let over = partition.members(color)[k];
                for crossing in &diagram.strand(over).crossings {
                    pass += propagate_across(partition, crossing);
                }
                k += 1;
            }
        }
        assignments += pass;
        if pass == 0 {
            return assignments;
        }
    }
}

/// Apply the propagation rule at one crossing. Returns 1 if a strand was colored.
fn propagate_across(partition: &mut ColorPartition, crossing: &Crossing) -> usize {
    let (start, end) = crossing.unders();
    match (partition.color_of(start), partition.color_of(end)) {
        (Some(color), None) => {
            partition.assign(end, color);
            1
        }
        (None, Some(color)) => {
            partition.assign(start, color);
            1
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Color, GaussCode};

    fn diagram(entries: &[i32]) -> Diagram {
        Diagram::build(GaussCode::from_entries(entries.to_vec())).unwrap()
    }

    fn ids(indices: &[usize]) -> Vec<StrandId> {
        indices.iter().map(|&i| StrandId::new(i)).collect()
    }

    fn colors(partition: &ColorPartition) -> Vec<Option<u8>> {
        (0..partition.strand_count())
            .map(|i| partition.color_of(StrandId::new(i)).map(Color::value))
            .collect()
    }

    #[test]
    fn test_figure_eight_triple_covers() {
        // Strand 0 passes over (3, 2); strand 2 is a seed, so 3 joins its color.
        let d = diagram(&[1, -2, 3, -4, 2, -1, 4, -3]);
        let partition = maximally_extend(&d, &ids(&[0, 1, 2]));
        assert_eq!(colors(&partition), vec![Some(0), Some(1), Some(2), Some(2)]);
        assert!(partition.is_complete());
        assert_eq!(partition.members(Color::new(2)), &ids(&[2, 3])[..]);
    }

    #[test]
    fn test_uncolored_over_strand_does_not_propagate() {
        // Strands: 0 over (3, 2), 1 over (0, 4), 2 over (4, 3), 3 over (2, 1), 4 over (1, 0).
        // From seeds 0, 1, 4 only colored strands 0, 1, 4 are over anything useful,
        // and their crossings are already both colored.
        let d = diagram(&[1, -2, 3, -1, 2, -4, 5, -3, 4, -5]);
        let partition = maximally_extend(&d, &ids(&[0, 1, 4]));
        assert_eq!(
            colors(&partition),
            vec![Some(0), Some(1), None, None, Some(2)]
        );
        assert_eq!(partition.uncolored().collect::<Vec<_>>(), ids(&[2, 3]));
    }

    #[test]
    fn test_extension_reaches_everything() {
        let d = diagram(&[1, -2, 3, -1, 2, -4, 5, -3, 4, -5]);
        let partition = maximally_extend(&d, &ids(&[0, 1, 4, 2]));
        assert_eq!(
            colors(&partition),
            vec![Some(0), Some(1), Some(3), Some(3), Some(2)]
        );
        assert!(partition.is_complete());
    }

    #[test]
    fn test_chain_within_one_pass() {
        // Strand 2 = (-2, 3, 1, 2, -3) passes over (0, 2), (1, 0), (2, 1).
        let d = diagram(&[1, 2, -3, -1, -2, 3]);
        let partition = maximally_extend(&d, &ids(&[2]));
        assert!(partition.is_complete());
        assert_eq!(partition.members(Color::new(0)), &ids(&[2, 0, 1])[..]);
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let d = diagram(&[1, -2, 3, -4, 2, -3, 5, -1, 4, -5]);
        for seeds in [[0, 1, 2], [2, 3, 4], [0, 2, 4]] {
            let mut partition = maximally_extend(&d, &ids(&seeds));
            let before = partition.clone();
            assert_eq!(extend(&d, &mut partition), 0);
            assert_eq!(partition, before);
        }
    }

    #[test]
    fn test_extend_counts_assignments() {
        let d = diagram(&[1, -2, 3, -4, 2, -1, 4, -3]);
        let mut partition = ColorPartition::new(&ids(&[0, 1, 2]), d.strand_count());
        assert_eq!(extend(&d, &mut partition), 1);
    }
}
