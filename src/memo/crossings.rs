// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crossing relation of a diagram.
//!
//! For every over-pass `v` of a strand, the two strands passing underneath are
//! the one whose entries begin with `-v` and the one whose entries end with
//! `-v`. Both are found through reverse indexes built once over all strands,
//! keyed by opening and closing under-pass.

use crate::error::{DiagramError, UnderSide};
use crate::geometry::{Crossing, StrandId};
use crate::memo::strands::StrandSpan;
use std::collections::HashMap;

/// Lookup from an under-pass entry to the strand it opens or closes.
#[derive(Debug, Default)]
struct UnderIndex {
    starting: HashMap<i32, StrandId>,
    ending: HashMap<i32, StrandId>,
}

impl UnderIndex {
    fn new(spans: &[StrandSpan]) -> Self {
        let mut index = Self::default();
        for (i, span) in spans.iter().enumerate() {
            let id = StrandId::new(i);
            index.starting.entry(span.first()).or_insert(id);
            index.ending.entry(span.last()).or_insert(id);
        }
        index
    }

    fn resolve(&self, over: i32) -> Result<Crossing, DiagramError> {
        let under = -over;
        let under_start = self
            .starting
            .get(&under)
            .copied()
            .ok_or(DiagramError::MissingUnderStrand {
                crossing: over,
                side: UnderSide::Start,
            })?;
        let under_end = self
            .ending
            .get(&under)
            .copied()
            .ok_or(DiagramError::MissingUnderStrand {
                crossing: over,
                side: UnderSide::End,
            })?;
        Ok(Crossing::new(over, under_start, under_end))
    }
}

/// Resolve the crossing list of every strand.
///
/// Entry `i` of the result lists, in order of occurrence, the crossings that
/// strand `i` passes over.
pub fn resolve_crossings(spans: &[StrandSpan]) -> Result<Vec<Vec<Crossing>>, DiagramError> {
    let index = UnderIndex::new(spans);
    spans
        .iter()
        .map(|span| {
            span.over_entries()
                .map(|over| index.resolve(over))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
