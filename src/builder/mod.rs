//! Builder API for ergonomic enumerator construction.
//!
//! `EnumeratorBuilder` assembles an enumerator from a problem and its
//! guards. `BuildError` is also the error returned by problem
//! constructors that reject their parameters.

pub mod enumerator;
pub mod error;

pub use enumerator::EnumeratorBuilder;
pub use error::BuildError;
