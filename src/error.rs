// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for Gauss code parsing and diagram construction.
//!
//! Both kinds are fatal to a single width computation: the input is either
//! not a Gauss code at all ([`ParseError`]) or describes a diagram the search
//! cannot work with ([`DiagramError`]).

use std::fmt;
use thiserror::Error;

/// Result type for width computations.
pub type Result<T> = std::result::Result<T, WidthError>;

/// A token could not be turned into a Gauss code entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token is not an integer once separators are stripped.
    #[error("token {position} ({token:?}) is not an integer")]
    InvalidToken { position: usize, token: String },

    /// Zero encodes neither an over-pass nor an under-pass.
    #[error("token {position} is zero; crossing numbers must be nonzero")]
    ZeroEntry { position: usize },
}

/// Which end of a strand a crossing lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderSide {
    /// The under-strand that begins at the crossing.
    Start,
    /// The under-strand that ends at the crossing.
    End,
}

impl fmt::Display for UnderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnderSide::Start => write!(f, "starting"),
            UnderSide::End => write!(f, "ending"),
        }
    }
}

/// The Gauss code does not describe a diagram the search can use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("Gauss code is empty")]
    EmptyCode,

    /// Without an under-pass there are no strands.
    #[error("Gauss code has no under-pass")]
    NoUnderPass,

    /// The only under-pass both opens and closes its strand.
    #[error("strand starting at position {position} ends where it starts")]
    DegenerateStrand { position: usize },

    /// No strand begins (or ends) with the negation of an over-pass.
    #[error("no strand {side} at crossing {crossing}")]
    MissingUnderStrand { crossing: i32, side: UnderSide },

    /// The seed search needs at least three strands.
    #[error("diagram has {count} strands; at least 3 are required")]
    TooFewStrands { count: usize },
}

/// Any failure of [`compute_width_bound`](crate::compute_width_bound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("diagram error: {0}")]
    Diagram(#[from] DiagramError),
}
