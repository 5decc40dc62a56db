// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type for strand colorings.
//!
//! Every seed of a trial gets its own color, numbered by the seed's position
//! in the seed set. A trial has at most [`EXTENDED_SEED_SIZE`] seeds, so
//! colors are 0..4.

use crate::geometry::constants::EXTENDED_SEED_SIZE;

/// Largest number of colors in any trial.
pub const NCOLORS: usize = EXTENDED_SEED_SIZE;

/// A color in the range 0..NCOLORS.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// colors with strand indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Create a new color, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NCOLORS`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < NCOLORS, "Color out of range: {}", value);
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}
