// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color partitions of the strands.
//!
//! A partition starts with every seed as the sole member of its own color and
//! grows as propagation colors more strands. Parts never overlap and a strand,
//! once colored, keeps its color for the rest of the trial.
//!
//! Two views are kept in step:
//! - per color, its members in the order they were colored (seed first)
//! - per strand, its color (or none), for constant-time lookups
//!
//! # Example
//!
//! ```
//! use gabai_width::geometry::StrandId;
//! use gabai_width::state::ColorPartition;
//!
//! let seeds = [StrandId::new(0), StrandId::new(2), StrandId::new(3)];
//! let mut partition = ColorPartition::new(&seeds, 5);
//! assert_eq!(partition.colored_count(), 3);
//!
//! let red = partition.color_of(StrandId::new(2)).unwrap();
//! partition.assign(StrandId::new(4), red);
//! assert_eq!(partition.members(red), &[StrandId::new(2), StrandId::new(4)]);
//! assert_eq!(partition.uncolored().collect::<Vec<_>>(), vec![StrandId::new(1)]);
//! ```

use crate::geometry::color::NCOLORS;
use crate::geometry::{Color, StrandId};
use std::fmt;

/// Assignment of colors to some of the strands of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPartition {
    /// Members of each color; `members[c][0]` is the seed of color `c`.
    members: Vec<Vec<StrandId>>,

    /// Reverse index: the color of each strand, if any.
    color_of: Vec<Option<Color>>,

    /// Number of strands with a color.
    colored: usize,
}

impl ColorPartition {
    /// Color each seed with its own color; every other strand is uncolored.
    ///
    /// # Panics
    ///
    /// Panics if there are more than NCOLORS seeds, if a seed repeats, or if
    /// a seed is not below `strand_count`.
    pub fn new(seeds: &[StrandId], strand_count: usize) -> Self {
        assert!(
            seeds.len() <= NCOLORS,
            "Too many seeds: {} (max {})",
            seeds.len(),
            NCOLORS
        );
        let mut partition = Self {
            members: Vec::with_capacity(seeds.len()),
            color_of: vec![None; strand_count],
            colored: 0,
        };
        for (i, &seed) in seeds.iter().enumerate() {
            assert!(
                seed.as_usize() < strand_count,
                "Seed {} out of range ({} strands)",
                seed,
                strand_count
            );
            let color = Color::new(i as u8);
            partition.members.push(Vec::new());
            partition.assign(seed, color);
        }
        partition
    }

    /// Number of strands in the diagram (colored or not).
    pub fn strand_count(&self) -> usize {
        self.color_of.len()
    }

    /// All colors in seed order.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        (0..self.members.len() as u8).map(Color::new)
    }

    /// Strands of `color`, in the order they were colored.
    pub fn members(&self, color: Color) -> &[StrandId] {
        &self.members[color.as_usize()]
    }

    #[inline]
    pub fn color_of(&self, strand: StrandId) -> Option<Color> {
        self.color_of[strand.as_usize()]
    }

    /// Give an uncolored strand a color.
    ///
    /// # Panics
    ///
    /// Panics if the strand is already colored; strands are never recolored.
    pub fn assign(&mut self, strand: StrandId, color: Color) {
        let slot = &mut self.color_of[strand.as_usize()];
        assert!(
            slot.is_none(),
            "Strand {} is already colored {:?}",
            strand,
            slot
        );
        *slot = Some(color);
        self.members[color.as_usize()].push(strand);
        self.colored += 1;
    }

    pub fn colored_count(&self) -> usize {
        self.colored
    }

    /// Whether every strand of the diagram has a color.
    pub fn is_complete(&self) -> bool {
        self.colored == self.color_of.len()
    }

    /// Strands without a color, in ascending order.
    pub fn uncolored(&self) -> impl Iterator<Item = StrandId> + '_ {
        self.color_of
            .iter()
            .enumerate()
            .filter(|(_, color)| color.is_none())
            .map(|(i, _)| StrandId::new(i))
    }
}

impl fmt::Display for ColorPartition {
    /// Format as `{A: A C | B: B | D: D E}`, one part per seed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, members) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}:", members[0])?;
            for strand in members {
                write!(f, " {}", strand)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(indices: &[usize]) -> Vec<StrandId> {
        indices.iter().map(|&i| StrandId::new(i)).collect()
    }

    #[test]
    fn test_new_colors_seeds_only() {
        let partition = ColorPartition::new(&ids(&[1, 3, 4]), 6);
        assert_eq!(partition.colors().count(), 3);
        assert_eq!(partition.colored_count(), 3);
        assert!(!partition.is_complete());
        assert_eq!(partition.members(Color::new(2)), &ids(&[4])[..]);
        assert_eq!(partition.color_of(StrandId::new(3)), Some(Color::new(1)));
        assert_eq!(partition.color_of(StrandId::new(0)), None);
        assert_eq!(partition.uncolored().collect::<Vec<_>>(), ids(&[0, 2, 5]));
    }

    #[test]
    fn test_assign_updates_both_views() {
        let mut partition = ColorPartition::new(&ids(&[0, 1, 2]), 4);
        partition.assign(StrandId::new(3), Color::new(2));
        assert_eq!(partition.members(Color::new(2)), &ids(&[2, 3])[..]);
        assert_eq!(partition.color_of(StrandId::new(3)), Some(Color::new(2)));
        assert!(partition.is_complete());
        assert_eq!(partition.uncolored().count(), 0);
    }

    #[test]
    #[should_panic(expected = "already colored")]
    fn test_no_recoloring() {
        let mut partition = ColorPartition::new(&ids(&[0, 1, 2]), 4);
        partition.assign(StrandId::new(1), Color::new(0));
    }

    #[test]
    #[should_panic(expected = "already colored")]
    fn test_duplicate_seed() {
        ColorPartition::new(&ids(&[0, 1, 1]), 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_seed_out_of_range() {
        ColorPartition::new(&ids(&[0, 1, 4]), 4);
    }

    #[test]
    fn test_display() {
        let mut partition = ColorPartition::new(&ids(&[0, 1, 3]), 5);
        partition.assign(StrandId::new(2), Color::new(0));
        assert_eq!(partition.to_string(), "{A: A C | B: B | D: D}");
    }
}
