// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, computed once per Gauss code).
//!
//! The [`Diagram`] is built from a Gauss code before the search starts:
//! - strands, by walking the circular code (`strands`)
//! - for each strand, the crossings it passes over (`crossings`)
//!
//! After construction it is only read, and one instance is shared by every
//! seed trial of the search.

pub mod crossings;
pub mod strands;

use crate::error::DiagramError;
use crate::geometry::{Crossing, GaussCode, StrandId};

pub use strands::StrandSpan;

/// A strand of the diagram together with the crossings it passes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    /// Identifier (index into the diagram's strand list).
    pub id: StrandId,

    /// Position of the opening under-pass in the Gauss code.
    pub start: usize,

    /// Entries from the opening under-pass through the closing one.
    pub entries: Vec<i32>,

    /// Crossings this strand passes over, in the order it meets them.
    pub crossings: Vec<Crossing>,
}

/// Knot diagram: strands and the crossing relation between them.
#[derive(Debug, Clone)]
pub struct Diagram {
    code: GaussCode,
    strands: Vec<Strand>,
}

impl Diagram {
    /// Build the diagram of a Gauss code.
    ///
    /// The code is not checked for realizability. Errors are reported when
    /// strands cannot be formed or a crossing has no matching under-strand.
    pub fn build(code: GaussCode) -> Result<Self, DiagramError> {
        let spans = strands::decompose(&code)?;
        let crossing_lists = crossings::resolve_crossings(&spans)?;

        let strands: Vec<Strand> = spans
            .into_iter()
            .zip(crossing_lists)
            .enumerate()
            .map(|(i, (span, crossings))| Strand {
                id: StrandId::new(i),
                start: span.start,
                entries: span.entries,
                crossings,
            })
            .collect();

        let diagram = Self { code, strands };
        tracing::debug!(
            strands = diagram.strand_count(),
            crossings = diagram.crossing_total(),
            "diagram built"
        );
        Ok(diagram)
    }

    /// The Gauss code this diagram was built from.
    pub fn code(&self) -> &GaussCode {
        &self.code
    }

    pub fn strand_count(&self) -> usize {
        self.strands.len()
    }

    /// Get a strand by its id.
    #[inline]
    pub fn strand(&self, id: StrandId) -> &Strand {
        &self.strands[id.as_usize()]
    }

    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }

    /// Every crossing, paired with the strand passing over it.
    pub fn crossings(&self) -> impl Iterator<Item = (StrandId, &Crossing)> + '_ {
        self.strands
            .iter()
            .flat_map(|strand| strand.crossings.iter().map(move |c| (strand.id, c)))
    }

    /// Total number of crossings in the crossing relation.
    pub fn crossing_total(&self) -> usize {
        self.crossings().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trefoil() -> Diagram {
        Diagram::build(GaussCode::from_entries(vec![-1, 2, -3, 1, -2, 3])).unwrap()
    }

    #[test]
    fn test_build_trefoil() {
        let diagram = trefoil();
        assert_eq!(diagram.strand_count(), 3);
        assert_eq!(diagram.crossing_total(), 3);

        let a = diagram.strand(StrandId::new(0));
        assert_eq!(a.entries, vec![-1, 2, -3]);
        assert_eq!(a.start, 0);
        assert_eq!(
            a.crossings,
            vec![Crossing::new(2, StrandId::new(2), StrandId::new(1))]
        );
    }

    #[test]
    fn test_crossings_iterator() {
        let diagram = trefoil();
        let overs: Vec<_> = diagram.crossings().map(|(over, c)| (over, c.number)).collect();
        assert_eq!(
            overs,
            vec![
                (StrandId::new(0), 2),
                (StrandId::new(1), 1),
                (StrandId::new(2), 3)
            ]
        );
    }

    #[test]
    fn test_build_propagates_errors() {
        let err = Diagram::build(GaussCode::from_entries(vec![3, 4])).unwrap_err();
        assert_eq!(err, DiagramError::NoUnderPass);
    }
}
