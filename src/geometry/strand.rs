// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strand identifiers.
//!
//! A strand is named by its dense index in the diagram's strand arena.
//! Indices are scoped to one diagram and carry no cap; the familiar letter
//! names (`A`, `B`, ..., `Z`, `AA`, `AB`, ...) are derived for display only.

use std::fmt;

/// Identifier of a strand within one diagram.
///
/// This is a newtype wrapper so strand indices cannot be confused with
/// crossing numbers or code positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrandId(usize);

impl StrandId {
    /// Create a strand id from an arena index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the id as a usize (for arena indexing).
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// Spreadsheet-style letter label: `A`..`Z`, then `AA`, `AB`, ...
    pub fn label(self) -> String {
        let mut letters = Vec::new();
        let mut n = self.0 + 1;
        while n > 0 {
            n -= 1;
            letters.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        letters.reverse();
        String::from_utf8_lossy(&letters).into_owned()
    }
}

impl fmt::Display for StrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
