// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crossing pairs.
//!
//! Each over-pass of a strand sits above a crossing where the knot passes
//! underneath. Going along the knot, one under-strand ends at that crossing
//! and the next one begins there. A [`Crossing`] records both, in the order
//! (strand starting at the crossing, strand ending at the crossing).

use crate::geometry::StrandId;

/// A crossing as seen from the strand passing over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    /// Crossing number (magnitude of the Gauss code entry).
    pub number: i32,

    /// The strand whose entries begin with the under-pass of this crossing.
    pub under_start: StrandId,

    /// The strand whose entries end with the under-pass of this crossing.
    pub under_end: StrandId,
}

impl Crossing {
    pub fn new(number: i32, under_start: StrandId, under_end: StrandId) -> Self {
        Self {
            number,
            under_start,
            under_end,
        }
    }

    /// The two under-strands as a pair.
    pub fn unders(&self) -> (StrandId, StrandId) {
        (self.under_start, self.under_end)
    }
}
