// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred on each predicate
//! 2. If Success: advance to next predicate
//! 3. If Choices(n): enter choice mode, call retry_pred(0..n-1)
//! 4. If Failure: backtrack to previous stack entry
//! 5. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gabai_width::context::SearchContext;
//! use gabai_width::engine::EngineBuilder;
//! use gabai_width::geometry::GaussCode;
//! use gabai_width::memo::Diagram;
//! use gabai_width::predicates::{ExtensionPredicate, SeedTriplePredicate, SuspendPredicate};
//!
//! let code = GaussCode::from_entries(vec![1, -2, 3, -1, 2, -4, 5, -3, 4, -5]);
//! let mut ctx = SearchContext::new(Arc::new(Diagram::build(code).unwrap()));
//! let engine = EngineBuilder::new()
//!     .add(Box::new(SeedTriplePredicate::new()))
//!     .add(Box::new(ExtensionPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Suspended: a four-seed coloring covers every strand
//! assert!(engine.search(&mut ctx).is_some());
//! assert!(ctx.state.witness.is_some());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 16;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize) -> Self {
        Self {
            predicate_index,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which checks that the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to find one solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if a predicate suspended
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// The solution is reported through side effects on `ctx`, not by the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without
    /// FAIL or SUSPEND), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }
        self.stack.push(StackEntry::new(0));

        loop {
            // Backtracked past the first predicate: exhausted
            let entry = self.stack.last_mut()?;
            let predicate_index = entry.predicate_index;

            if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[predicate_index].try_pred(ctx);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(predicate_index);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => {
                        tracing::trace!(
                            predicate = self.predicates[predicate_index].name(),
                            "suspended"
                        );
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;

                self.retry_count += 1;
                let result = self.predicates[predicate_index].retry_pred(ctx, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(predicate_index);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the predicate after `current`.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, current: usize) {
        let next_index = current + 1;
        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate programs must terminate with a FAIL or SUSPEND predicate."
            );
        }
        self.stack.push(StackEntry::new(next_index));
    }

    /// Returns (try_count, retry_count) for the last call to search.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a predicate program.
///
/// Predicates are added in order with [`add`](Self::add); the program is
/// closed with [`terminal`](Self::terminal), which only accepts a
/// [`TerminalPredicate`]. Only a closed program can be built.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T>(mut self, predicate: Box<T>) -> TerminatedBuilder
    where
        T: TerminalPredicate + 'static,
    {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A predicate program that ends with a terminal predicate.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
