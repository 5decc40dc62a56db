// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use gabai_width::geometry::{GaussCode, StrandId};
use gabai_width::memo::Diagram;
use proptest::prelude::*;

/// Trefoil: three strands, every seed triple is the whole diagram.
pub const TREFOIL: [i32; 6] = [-1, 2, -3, 1, -2, 3];

/// Figure-eight knot: four strands.
pub const FIGURE_EIGHT: [i32; 8] = [1, -2, 3, -4, 2, -1, 4, -3];

/// Cinquefoil: every triple is conflicted but already covers the diagram.
pub const CINQUEFOIL: [i32; 10] = [1, -2, 3, -4, 5, -1, 2, -3, 4, -5];

/// Covered by the third seed triple (0, 1, 4) plus strand 2.
pub const EARLY_COVER: [i32; 10] = [1, -2, 3, -1, 2, -4, 5, -3, 4, -5];

/// Covered only by the last seed triple (2, 3, 4) plus strand 0.
pub const LATE_COVER: [i32; 10] = [1, -2, 3, -4, 2, -3, 5, -1, 4, -5];

/// Strand 1 passes over all four crossings; the others pass over none.
pub const ONE_BRIDGE: [i32; 8] = [-1, -4, 4, 3, 2, 1, -3, -2];

/// Two strands carry every crossing; partial triples conflict only under
/// uncolored strands.
pub const TWO_BRIDGES: [i32; 10] = [3, 2, 5, -4, -3, -5, 1, -2, -1, 4];

/// Non-alternating code whose last strand wraps around the end of the code.
pub const WRAPAROUND: [i32; 6] = [1, 2, -3, -1, -2, 3];

pub fn diagram(entries: &[i32]) -> Diagram {
    Diagram::build(GaussCode::from_entries(entries.to_vec())).unwrap()
}

pub fn ids<const N: usize>(indices: [usize; N]) -> [StrandId; N] {
    indices.map(StrandId::new)
}

/// Rotate a code left by `k` positions and rename crossing `c` to `labels[c - 1]`.
pub fn rotate_and_relabel(entries: &[i32], k: usize, labels: &[i32]) -> Vec<i32> {
    let mut rotated = entries.to_vec();
    rotated.rotate_left(k % entries.len());
    rotated
        .into_iter()
        .map(|v| labels[v.unsigned_abs() as usize - 1] * v.signum())
        .collect()
}

/// Alternating codes `o1, -u1, o2, -u2, ...` on 3 to 7 crossings, where the
/// over and under orders are independent permutations.
pub fn alternating_code() -> impl Strategy<Value = Vec<i32>> {
    (3i32..=7)
        .prop_flat_map(|n| {
            let labels: Vec<i32> = (1..=n).collect();
            (Just(labels.clone()).prop_shuffle(), Just(labels).prop_shuffle())
        })
        .prop_map(|(overs, unders)| {
            overs
                .into_iter()
                .zip(unders)
                .flat_map(|(over, under)| [over, -under])
                .collect()
        })
}

/// An alternating code with a rotation and a renaming of its crossings.
pub fn alternating_code_with_symmetry() -> impl Strategy<Value = (Vec<i32>, usize, Vec<i32>)> {
    alternating_code().prop_flat_map(|code| {
        let n = code.len() / 2;
        let labels: Vec<i32> = (1..=n as i32).collect();
        (Just(code), 0..2 * n, Just(labels).prop_shuffle())
    })
}
