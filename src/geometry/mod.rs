// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basic types for knot diagrams.
//!
//! This module contains the small value types the rest of the crate is built on:
//! - GaussCode: the circular signed crossing sequence
//! - Color: the color of one seed in a trial
//! - StrandId: dense identifier of a strand within one diagram
//! - Crossing: the two under-strands below an over-pass
//! - WidthBound: the answer of the search

pub mod bound;
pub mod color;
pub mod constants;
pub mod crossing;
pub mod gauss;
pub mod strand;

// Re-export for convenience
pub use bound::WidthBound;
pub use color::Color;
pub use constants::*;
pub use crossing::Crossing;
pub use gauss::GaussCode;
pub use strand::StrandId;
