//! Generic backtracking engine.
//!
//! The `Enumerator` drives any `Problem` through an exhaustive
//! depth-first search:
//! - goal states emit the partial solution that reached them
//! - infeasible states and dead ends contribute nothing
//! - every other state recurses once per accepted choice
//!
//! Optional collaborators hook into the same walk: guards prune child
//! states, a `Memo` answers repeated states from stored suffixes, and a
//! `GraphRecorder` numbers every visited node.

mod enumerator;
mod error;
mod memo;
mod stats;

pub use enumerator::Enumerator;
pub use error::EnumerationError;
pub use memo::{Memo, NoMemo, SuffixTable};
pub use stats::EnumerationStats;
