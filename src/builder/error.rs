//! Build errors for problems and enumerators.

use thiserror::Error;

/// Errors that can occur when constructing a problem or an enumerator.
///
/// These are all caught before a search starts; a running search never
/// produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Problem not specified. Call .problem(&problem) before .build()")]
    MissingProblem,

    #[error("Denomination {0} is not positive")]
    NonPositiveDenomination(i64),

    #[error("Denomination {0} appears more than once")]
    DuplicateDenomination(i64),

    #[error("No step sizes given. Provide at least one step size")]
    EmptyStepSizes,

    #[error("Step size {0} is not positive")]
    NonPositiveStepSize(i64),

    #[error("Step size {0} appears more than once")]
    DuplicateStepSize(i64),

    #[error("Grid extent ({max_x}, {max_y}) is negative")]
    NegativeGridExtent { max_x: i64, max_y: i64 },
}
