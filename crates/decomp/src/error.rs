//! Error kinds of spec.md §7.
//!
//! Why this design
//! - Two families: precondition violations (caught before the DP starts)
//!   and an infeasible-subproblem failure (caught mid-algorithm, and
//!   treated as fatal rather than recovered internally — it indicates a
//!   bug, a non-simple input, or a visibility-oracle inconsistency, never
//!   a normal outcome).
//! - Grounded on the teacher's `thiserror`-derived error enum style: named
//!   variants with `#[error("...")]` messages instead of a stringly-typed
//!   error.

use thiserror::Error;

/// Everything that can go wrong building a [`crate::engine::Engine`] or
/// running [`crate::engine::Engine::decompose`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecompError {
    #[error("polygon must have at least 3 vertices, got {found}")]
    TooFewVertices { found: usize },

    #[error("vertex ids must be 0..N-1 in input order; expected id {expected} at position {position}, found {found}")]
    NonContiguousIds {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("input polygon is not counter-clockwise (signed area = {area})")]
    NotCounterClockwise { area: f64 },

    #[error("infeasible subproblem ({i}, {k}): junction sequence S is empty")]
    InfeasibleSubproblem { i: usize, k: usize },
}
