// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decomposition of a Gauss code into strands.
//!
//! A strand runs from one under-pass, over any number of crossings, to the
//! next under-pass. Neighbouring strands share their end points: the
//! under-pass closing one strand opens the next.
//!
//! # Algorithm
//!
//! Starting from the first under-pass in the code:
//! 1. Advance circularly past over-passes to the next under-pass
//! 2. The span between the two under-passes (inclusive, wrapping past the end
//!    of the code when needed) is one strand
//! 3. Continue from the closing under-pass
//!
//! The walk stops at the first strand whose entries repeat a strand already
//! recorded. On a well-formed code every strand opens with a distinct
//! under-pass, so this is the walk returning to its first start position. A
//! malformed code that repeats an under-pass, such as `[-1, 2, -1, 2]`, can
//! close early with fewer strands than under-passes.
//!
//! # Example
//!
//! For the code `[1, 2, -3, -1, -2, 3]` the strands are
//! - `(-3, -1)` starting at position 2
//! - `(-1, -2)` starting at position 3
//! - `(-2, 3, 1, 2, -3)` starting at position 4, wrapping past the end

use crate::error::DiagramError;
use crate::geometry::GaussCode;
use std::collections::HashSet;

/// One strand's entries and where it starts in the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandSpan {
    /// Position of the opening under-pass in the code.
    pub start: usize,

    /// Entries from the opening under-pass to the closing one, inclusive.
    pub entries: Vec<i32>,
}

impl StrandSpan {
    /// The opening under-pass.
    pub fn first(&self) -> i32 {
        self.entries[0]
    }

    /// The closing under-pass.
    pub fn last(&self) -> i32 {
        self.entries[self.entries.len() - 1]
    }

    /// The over-passes, in the order the strand meets them.
    pub fn over_entries(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().copied().filter(|&entry| entry > 0)
    }
}

/// Split a circular Gauss code into its strands, in walk order.
///
/// Strand `i` of the result becomes `StrandId::new(i)` in the diagram.
pub fn decompose(code: &GaussCode) -> Result<Vec<StrandSpan>, DiagramError> {
    if code.is_empty() {
        return Err(DiagramError::EmptyCode);
    }
    let first = code
        .under_positions()
        .next()
        .ok_or(DiagramError::NoUnderPass)?;

    let mut recorded = HashSet::new();
    let mut spans = Vec::new();
    let mut start = first;

    loop {
        let end = next_under(code, start);
        if end == start {
            return Err(DiagramError::DegenerateStrand { position: start });
        }
        let span = span_between(code, start, end);
        if !recorded.insert(span.entries.clone()) {
            return Ok(spans);
        }
        tracing::trace!(start, end, entries = ?span.entries, "strand");
        spans.push(span);
        start = end;
    }
}

/// Position of the first under-pass after `from`, wrapping around.
///
/// `from` must itself be an under-pass, which bounds the scan.
fn next_under(code: &GaussCode, from: usize) -> usize {
    let len = code.len();
    let mut position = (from + 1) % len;
    while code.at(position) > 0 {
        position = (position + 1) % len;
    }
    position
}

/// Entries from `start` through `end` inclusive, joining tail and head of the
/// code when the span wraps.
fn span_between(code: &GaussCode, start: usize, end: usize) -> StrandSpan {
    let len = code.len();
    let entries = if start < end {
        code.entries()[start..=end].to_vec()
    } else {
        let mut entries = code.entries()[start..].to_vec();
        entries.extend_from_slice(&code.entries()[..=end]);
        entries
    };
    debug_assert_eq!(entries.len(), (end + len - start) % len + 1);
    StrandSpan { start, entries }
}
