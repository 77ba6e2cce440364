//! Concrete problems.
//!
//! Each submodule provides a `Problem` implementation together with a
//! plain entry-point function returning its solutions:
//!
//! | Problem | Entry point | Choice |
//! |---|---|---|
//! | `Steps` | `steps` | step size |
//! | `Change` | `change`, `change_graph` | `Tender` |
//! | `Permutations` | `permute` | `Pick` |
//! | `NQueens` | `n_queens`, `n_queens_reconstructed` | column |
//! | `PowerSet` | `power_set` | `Membership` |
//! | `RobotPath` | `robot_path`, `robot_path_within` | `Move` |

pub mod change;
pub mod permutations;
pub mod power_set;
pub mod queens;
pub mod robot;
pub mod steps;

pub use change::{change, change_graph, Change, Tender, Tendering, Till};
pub use permutations::{permute, Permutations, Pick};
pub use power_set::{power_set, Membership, PowerSet};
pub use queens::{
    n_queens, n_queens_reconstructed, Board, NQueens, PlacementRule, ReconstructedRule,
    UnverifiedRule,
};
pub use robot::{
    robot_path, robot_path_within, Direction, Grid, Move, Point, Position, RobotPath,
};
pub use steps::{steps, Steps};

use std::convert::Infallible;

/// Unwrap the result of a problem whose functions cannot fail.
pub(crate) fn total<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
