// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants of the width bound search.
//!
//! The bound values and the seed sizes come from the theorem relating
//! Wirtinger number four diagrams to Gabai width; they are taken as given.
//!
//! - A diagram whose strands can be fully colored from three seeds plus one
//!   extra strand, after a seed triple that leaves a multicolored crossing,
//!   has width at most [`REDUCED_BOUND`].
//! - Otherwise the general bound [`GENERAL_BOUND`] applies.

/// Number of seed strands in the primary search.
pub const SEED_SIZE: usize = 3;

/// Number of seed strands in an extension trial (seed triple plus one).
pub const EXTENDED_SEED_SIZE: usize = SEED_SIZE + 1;

/// Fewest strands a diagram needs before a seed triple exists.
pub const MIN_STRANDS: usize = SEED_SIZE;

/// Width bound when some seed triple extends to a full coloring.
pub const REDUCED_BOUND: u32 = 28;

/// Width bound when no seed triple does.
pub const GENERAL_BOUND: u32 = 32;

/// Compute binomial coefficient (n choose k) at compile time.
///
/// Returns the number of ways to choose k items from n items.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        // Exact at every step: the running product is C(n, i + 1).
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// Number of seed triples over `strand_count` strands.
pub const fn seed_triple_count(strand_count: usize) -> usize {
    choose(strand_count, SEED_SIZE)
}

const _: () = assert!(EXTENDED_SEED_SIZE == 4);
const _: () = assert!(REDUCED_BOUND < GENERAL_BOUND);
