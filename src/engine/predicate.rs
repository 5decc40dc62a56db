// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, offer choices, or suspend the search.
//!
//! # Example
//!
//! ```
//! use gabai_width::engine::{Predicate, PredicateResult};
//! use gabai_width::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct TwoWay;
//!
//! impl Predicate for TwoWay {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, choice: usize) -> PredicateResult {
//!         if choice == 0 {
//!             PredicateResult::Failure
//!         } else {
//!             PredicateResult::Success
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWay"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution and hand the engine back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a predicate program.
///
/// Terminal predicates are FAIL or SUSPEND; they never return Success.
/// [`EngineBuilder::terminal`](crate::engine::EngineBuilder::terminal) only
/// accepts predicates with this marker, so a built engine always ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// Each predicate represents a choice point in the search. The engine
/// calls `try_pred` to attempt the predicate for the first time, and
/// `retry_pred` on backtracking to try alternative choices.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` with choice 0, 1, ... until
///    one succeeds; after a later failure it resumes with the next choice
///
/// # State
///
/// Predicates write the current trial into `ctx.state`. Each choice replaces
/// what the previous choice wrote, so nothing is undone on backtracking.
pub trait Predicate: Debug {
    /// Try this predicate for the first time.
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n, in
    /// ascending order.
    ///
    /// Can return `Success` or `Failure`.
    /// retry_pred cannot return Choices or Suspend (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for this predicate (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
