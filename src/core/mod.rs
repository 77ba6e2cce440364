//! Core enumeration types.
//!
//! This module contains the pure vocabulary shared by the engine and the
//! problems:
//! - The `Problem` trait every enumerable problem implements
//! - Immutable partial and complete solutions
//! - Guard predicates for pruning
//!
//! Nothing in this module has side effects.

mod guard;
mod problem;
mod solution;

pub use guard::Guard;
pub use problem::Problem;
pub use solution::{into_choice_vecs, PartialSolution, Solution, SolutionSet};
