//! N-queens placements, one queen per row.
//!
//! Whether a column is a legal placement is decided by a `PlacementRule`.
//! The plain entry point uses `UnverifiedRule`, which has no placement
//! check and fails the enumeration as soon as one is needed.
//! `ReconstructedRule` supplies the usual column and diagonal conflict
//! check; it is a reconstruction and has not been verified against any
//! reference results.

use crate::core::{into_choice_vecs, Problem};
use crate::engine::{EnumerationError, Enumerator};
use serde::{Deserialize, Serialize};

/// Decides whether a queen may go in `column` of the next row.
pub trait PlacementRule {
    /// `placed[row]` is the column of the queen already placed on `row`.
    fn permits(&self, placed: &[usize], column: usize) -> Result<bool, EnumerationError>;
}

/// Placement rule without an implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnverifiedRule;

impl PlacementRule for UnverifiedRule {
    fn permits(&self, _placed: &[usize], _column: usize) -> Result<bool, EnumerationError> {
        Err(EnumerationError::unimplemented("n-queens placement rule"))
    }
}

/// Rejects a column shared with, or on a diagonal of, any placed queen.
///
/// Reconstructed behavior, not verified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconstructedRule;

impl PlacementRule for ReconstructedRule {
    fn permits(&self, placed: &[usize], column: usize) -> Result<bool, EnumerationError> {
        let row = placed.len();
        Ok(placed.iter().enumerate().all(|(other_row, &other_column)| {
            other_column != column && row - other_row != other_column.abs_diff(column)
        }))
    }
}

/// A partly filled board: the next row to fill is `placed.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    pub placed: Vec<usize>,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            placed: Vec::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.placed.len()
    }
}

/// Queens placed row by row; a choice is the column for the next row.
#[derive(Clone, Debug, Default)]
pub struct NQueens<R = UnverifiedRule> {
    rule: R,
}

impl NQueens<UnverifiedRule> {
    pub fn new() -> Self {
        Self {
            rule: UnverifiedRule,
        }
    }
}

impl<R: PlacementRule> NQueens<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: PlacementRule> Problem for NQueens<R> {
    type State = Board;
    type Choice = usize;
    type Error = EnumerationError;

    fn name(&self) -> &str {
        "n_queens"
    }

    fn is_goal(&self, board: &Board) -> bool {
        board.row() == board.size
    }

    fn is_infeasible(&self, board: &Board) -> bool {
        board.row() > board.size
    }

    fn choices(&self, board: &Board) -> Vec<usize> {
        (0..board.size).collect()
    }

    fn transition(&self, board: &Board, column: &usize) -> Board {
        let mut placed = board.placed.clone();
        placed.push(*column);
        Board {
            size: board.size,
            placed,
        }
    }

    fn accepts(&self, board: &Board, column: &usize) -> Result<bool, EnumerationError> {
        self.rule.permits(&board.placed, *column)
    }

    fn label(&self, board: &Board, column: &usize) -> String {
        format!("row {} column {column}", board.row())
    }

    fn terminal_label(&self, board: &Board) -> String {
        format!("{:?}", board.placed)
    }
}

/// Queen placements on an `n` by `n` board, with no placement check.
///
/// Every board with at least one row needs the check, so this only
/// succeeds for `n == 0`.
///
/// ```rust
/// use exhaust::engine::EnumerationError;
/// use exhaust::problems::n_queens;
///
/// assert_eq!(n_queens(0), Ok(vec![Vec::<usize>::new()]));
/// assert!(matches!(n_queens(4), Err(EnumerationError::Unimplemented { .. })));
/// ```
pub fn n_queens(n: usize) -> Result<Vec<Vec<usize>>, EnumerationError> {
    let problem = NQueens::new();
    Enumerator::new(&problem)
        .enumerate(Board::empty(n))
        .map(into_choice_vecs)
}

/// Queen placements on an `n` by `n` board using `ReconstructedRule`.
///
/// ```rust
/// use exhaust::problems::n_queens_reconstructed;
///
/// let placements = n_queens_reconstructed(4).unwrap();
/// assert_eq!(placements, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
/// ```
pub fn n_queens_reconstructed(n: usize) -> Result<Vec<Vec<usize>>, EnumerationError> {
    let problem = NQueens::with_rule(ReconstructedRule);
    Enumerator::new(&problem)
        .enumerate(Board::empty(n))
        .map(into_choice_vecs)
}
