// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multicolored crossings.
//!
//! After propagation, a crossing whose two under-strands carry different
//! colors is a conflict: the three-seed coloring cannot be read as a thin
//! position there. The search uses the count to decide whether a seed triple
//! is worth extending with a fourth seed.
//!
//! Only crossings under a colored strand are counted. A crossing under an
//! uncolored strand is not a conflict even when both its under-strands are
//! colored.

use crate::geometry::{Crossing, StrandId};
use crate::memo::Diagram;
use crate::state::ColorPartition;

/// Whether both under-strands of `crossing` are colored, in different colors.
#[inline]
pub fn is_multicolored(partition: &ColorPartition, crossing: &Crossing) -> bool {
    let (start, end) = crossing.unders();
    matches!(
        (partition.color_of(start), partition.color_of(end)),
        (Some(a), Some(b)) if a != b
    )
}

/// Crossings under colored strands, visited in the same order as propagation:
/// colors in seed order, members in the order they were colored.
fn crossings_under_colored<'a>(
    partition: &'a ColorPartition,
    diagram: &'a Diagram,
) -> impl Iterator<Item = (StrandId, &'a Crossing)> + 'a {
    partition.colors().flat_map(move |color| {
        partition.members(color).iter().flat_map(move |&over| {
            diagram
                .strand(over)
                .crossings
                .iter()
                .map(move |crossing| (over, crossing))
        })
    })
}

/// Number of multicolored crossings under colored strands.
pub fn count_multicolored_crossings(partition: &ColorPartition, diagram: &Diagram) -> usize {
    crossings_under_colored(partition, diagram)
        .filter(|(_, crossing)| is_multicolored(partition, crossing))
        .count()
}

/// The multicolored crossings under colored strands, each with its over-strand.
pub fn multicolored_crossings(
    partition: &ColorPartition,
    diagram: &Diagram,
) -> Vec<(StrandId, Crossing)> {
    crossings_under_colored(partition, diagram)
        .filter(|(_, crossing)| is_multicolored(partition, crossing))
        .map(|(over, crossing)| (over, *crossing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GaussCode;
    use crate::propagation::maximally_extend;

    fn diagram(entries: &[i32]) -> Diagram {
        Diagram::build(GaussCode::from_entries(entries.to_vec())).unwrap()
    }

    fn ids(indices: &[usize]) -> Vec<StrandId> {
        indices.iter().map(|&i| StrandId::new(i)).collect()
    }

    #[test]
    fn test_trefoil_every_crossing_conflicts() {
        let d = diagram(&[-1, 2, -3, 1, -2, 3]);
        let partition = maximally_extend(&d, &ids(&[0, 1, 2]));
        assert_eq!(count_multicolored_crossings(&partition, &d), 3);
    }

    #[test]
    fn test_same_color_is_not_a_conflict() {
        // Strand 3 joins strand 2, so the crossing under strand 0 is monochrome.
        let d = diagram(&[1, -2, 3, -4, 2, -1, 4, -3]);
        let partition = maximally_extend(&d, &ids(&[0, 1, 2]));
        assert_eq!(count_multicolored_crossings(&partition, &d), 3);
        let overs: Vec<_> = multicolored_crossings(&partition, &d)
            .into_iter()
            .map(|(over, _)| over)
            .collect();
        assert_eq!(overs, ids(&[1, 2, 3]));
    }

    #[test]
    fn test_partial_closure_conflicts() {
        let d = diagram(&[1, -2, 3, -1, 2, -4, 5, -3, 4, -5]);
        let partition = maximally_extend(&d, &ids(&[0, 1, 4]));
        assert_eq!(count_multicolored_crossings(&partition, &d), 2);
        let found = multicolored_crossings(&partition, &d);
        assert_eq!(
            found,
            vec![
                (StrandId::new(1), Crossing::new(2, StrandId::new(0), StrandId::new(4))),
                (StrandId::new(4), Crossing::new(1, StrandId::new(1), StrandId::new(0))),
            ]
        );
    }

    #[test]
    fn test_uncolored_over_strand_does_not_count() {
        // Strand 0 passes over (3, 2) and is itself uncolored.
        let d = diagram(&[1, -2, 3, -4, 2, -1, 4, -3]);
        let partition = ColorPartition::new(&ids(&[3, 2]), d.strand_count());
        assert_eq!(count_multicolored_crossings(&partition, &d), 0);
        assert!(multicolored_crossings(&partition, &d).is_empty());
    }

    #[test]
    fn test_conflicts_hidden_under_uncolored_strand() {
        // Strand 1 passes over every crossing; seeds 0, 2, 3 leave it uncolored.
        let d = diagram(&[-1, -4, 4, 3, 2, 1, -3, -2]);
        let partition = maximally_extend(&d, &ids(&[0, 2, 3]));
        assert_eq!(partition.color_of(StrandId::new(1)), None);
        assert_eq!(count_multicolored_crossings(&partition, &d), 0);

        let partition = maximally_extend(&d, &ids(&[0, 1, 2]));
        assert_eq!(count_multicolored_crossings(&partition, &d), 3);
    }

    #[test]
    fn test_uncolored_under_strand_is_not_a_conflict() {
        let d = diagram(&[1, -2, 3, -4, 2, -1, 4, -3]);
        let partition = ColorPartition::new(&ids(&[1]), d.strand_count());
        assert_eq!(count_multicolored_crossings(&partition, &d), 0);
    }
}
