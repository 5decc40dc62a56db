// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The width search is the predicate program
//!
//! ```text
//! SeedTriple -> Extension -> Suspend
//! ```
//!
//! The engine backtracks from a failed extension into the next seed triple;
//! reaching `Suspend` means a four-seed coloring covers the diagram.
//!
//! # Organization
//!
//! - `seeds`: SeedTriplePredicate and the lazy seed triple iterator
//! - `extension`: ExtensionPredicate for the fourth seed
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod extension;
pub mod seeds;

pub use extension::{extension_trial, ExtensionPredicate};
pub use seeds::{seed_trial, SeedTriplePredicate, SeedTriples};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine explore every alternative.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gabai_width::context::SearchContext;
/// use gabai_width::engine::EngineBuilder;
/// use gabai_width::geometry::GaussCode;
/// use gabai_width::memo::Diagram;
/// use gabai_width::predicates::{FailPredicate, SeedTriplePredicate};
/// use gabai_width::state::Counters;
///
/// let code = GaussCode::from_entries(vec![1, -2, 3, -4, 5, -1, 2, -3, 4, -5]);
/// let mut ctx = SearchContext::new(Arc::new(Diagram::build(code).unwrap()));
/// let engine = EngineBuilder::new()
///     .add(Box::new(SeedTriplePredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::SeedTriples), 10);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, handing the engine back to the caller.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
