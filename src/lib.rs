//! Exhaust: exhaustive enumeration of combinatorial solutions
//!
//! A problem is described by pure functions over a remaining state, and a
//! single generic depth-first enumerator explores it with backtracking.
//! Every branch works on its own copy of the state and of the partial
//! solution, so siblings never observe each other's choices.
//!
//! # Core Concepts
//!
//! - **Problem**: goal test, infeasibility test, ordered choices and a
//!   pure transition, implemented once per problem via the `Problem` trait
//! - **Enumerator**: the generic driver, with optional guards, memo and
//!   statistics
//! - **GraphRecorder**: numbers every visited node and records edges for
//!   rendering as a directed graph
//!
//! # Example
//!
//! ```rust
//! use exhaust::core::Problem;
//! use exhaust::Enumerator;
//! use std::convert::Infallible;
//!
//! /// Strictly increasing sequences over 1..=3.
//! struct Increasing;
//!
//! impl Problem for Increasing {
//!     type State = (u8, bool);
//!     type Choice = u8;
//!     type Error = Infallible;
//!
//!     fn name(&self) -> &str {
//!         "increasing"
//!     }
//!
//!     fn is_goal(&self, &(_, stop): &(u8, bool)) -> bool {
//!         stop
//!     }
//!
//!     fn choices(&self, &(last, _): &(u8, bool)) -> Vec<u8> {
//!         // 0 ends the sequence
//!         std::iter::once(0).chain(last + 1..=3).collect()
//!     }
//!
//!     fn transition(&self, &(last, _): &(u8, bool), next: &u8) -> (u8, bool) {
//!         if *next == 0 { (last, true) } else { (*next, false) }
//!     }
//! }
//!
//! let solutions = Enumerator::new(&Increasing).enumerate((0, false)).unwrap();
//! assert_eq!(solutions.len(), 8);
//! assert_eq!(solutions[1].choices(), &[1, 0]);
//! ```
//!
//! The `problems` module ships six ready-made problems:
//!
//! ```rust
//! use exhaust::problems::{permute, steps};
//!
//! assert_eq!(steps(3), vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]);
//! assert_eq!(permute(&['a', 'b', 'c']).len(), 6);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod graph;
pub mod problems;

// Re-export commonly used types
pub use builder::{BuildError, EnumeratorBuilder};
pub use config::{ConfigError, ExhaustConfig};
pub use core::{Guard, PartialSolution, Problem, Solution, SolutionSet};
pub use engine::{EnumerationError, EnumerationStats, Enumerator, Memo, NoMemo, SuffixTable};
pub use graph::{GraphEnumeration, GraphRecorder, NodeId, NodeKind, VisitedNode};
