// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gauss codes.
//!
//! A Gauss code lists the crossings met while walking once around a knot
//! diagram. A positive entry is an over-pass, a negative entry an under-pass,
//! and the magnitude names the crossing. The sequence is circular: the walk
//! continues from the last entry back to the first.
//!
//! Codes arrive as loose tokens, often copied from tables where every entry
//! but the last carries a trailing comma (`"-1,"`, `"2,"`, `"-3"`). Commas are
//! stripped before conversion.
//!
//! # Example
//!
//! ```
//! use gabai_width::geometry::GaussCode;
//!
//! let code = GaussCode::from_tokens(["-1,", "2,", "-3,", "1,", "-2,", "3"]).unwrap();
//! assert_eq!(code.entries(), &[-1, 2, -3, 1, -2, 3]);
//!
//! let same: GaussCode = "[-1, 2, -3, 1, -2, 3]".parse().unwrap();
//! assert_eq!(code, same);
//! ```

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Separator that may be embedded in a token.
const SEPARATOR: char = ',';

/// A circular sequence of signed crossing numbers.
///
/// Well-formedness (each magnitude appearing once as an over-pass and once
/// as an under-pass) is assumed, not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GaussCode {
    entries: Vec<i32>,
}

impl GaussCode {
    /// Parse a sequence of tokens, stripping embedded commas.
    ///
    /// Fails on the first token that is not a nonzero integer.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| parse_entry(position, token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Wrap entries that are already integers.
    ///
    /// # Panics
    ///
    /// Panics if any entry is zero.
    pub fn from_entries(entries: Vec<i32>) -> Self {
        assert!(
            !entries.contains(&0),
            "Gauss code entries must be nonzero: {:?}",
            entries
        );
        Self { entries }
    }

    /// The signed entries in walk order.
    pub fn entries(&self) -> &[i32] {
        &self.entries
    }

    /// Number of entries (twice the crossing count for a well-formed code).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `position`, wrapping around the end.
    pub fn at(&self, position: usize) -> i32 {
        self.entries[position % self.entries.len()]
    }

    /// Positions of the under-passes, in walk order.
    pub fn under_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|&(_, &entry)| entry < 0)
            .map(|(position, _)| position)
    }
}

fn parse_entry(position: usize, token: &str) -> Result<i32, ParseError> {
    let stripped: String = token.chars().filter(|&c| c != SEPARATOR).collect();
    let entry = stripped
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidToken {
            position,
            token: token.to_string(),
        })?;
    if entry == 0 {
        return Err(ParseError::ZeroEntry { position });
    }
    Ok(entry)
}

impl FromStr for GaussCode {
    type Err = ParseError;

    /// Parse a whole code written on one line, such as `"[-1, 2, -3, 1, -2, 3]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim().trim_start_matches(['[', '(']).trim_end_matches([']', ')']);
        Self::from_tokens(
            body.split(|c: char| c == SEPARATOR || c.is_whitespace())
                .filter(|piece| !piece.is_empty()),
        )
    }
}

impl fmt::Display for GaussCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}
