// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two possible answers of the width search.

use crate::geometry::constants::{GENERAL_BOUND, REDUCED_BOUND};
use std::fmt;

/// Upper bound on Gabai width for a Wirtinger number four diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthBound {
    /// Some seed triple extends to a full coloring: width at most 28.
    Reduced,
    /// No seed triple does: width at most 32.
    General,
}

impl WidthBound {
    /// The bound as a number.
    pub fn value(self) -> u32 {
        match self {
            WidthBound::Reduced => REDUCED_BOUND,
            WidthBound::General => GENERAL_BOUND,
        }
    }

    /// The bound as the literal `"28"` or `"32"`.
    pub fn as_str(self) -> &'static str {
        match self {
            WidthBound::Reduced => "28",
            WidthBound::General => "32",
        }
    }
}

impl fmt::Display for WidthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
