//! Partial and complete solutions.
//!
//! A partial solution is the ordered sequence of choices taken so far on
//! one branch. It is immutable: `record` returns a new partial solution
//! with the choice appended, so sibling branches never observe each
//! other's choices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered choices made so far on one branch of the search.
///
/// # Example
///
/// ```rust
/// use exhaust::core::PartialSolution;
///
/// let empty = PartialSolution::new();
/// let one = empty.record(1);
/// let two = one.record(2);
///
/// assert_eq!(empty.choices(), &[] as &[i32]);
/// assert_eq!(one.choices(), &[1]);
/// assert_eq!(two.choices(), &[1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialSolution<C> {
    choices: Vec<C>,
}

impl<C> Default for PartialSolution<C> {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
        }
    }
}

impl<C: Clone> PartialSolution<C> {
    /// Create an empty partial solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from choices already made elsewhere.
    pub fn from_choices(choices: Vec<C>) -> Self {
        Self { choices }
    }

    /// Append a choice, returning a new partial solution.
    ///
    /// The receiver is left untouched.
    ///
    /// ```rust
    /// use exhaust::core::PartialSolution;
    ///
    /// let base = PartialSolution::from_choices(vec!['a']);
    /// let left = base.record('b');
    /// let right = base.record('c');
    ///
    /// assert_eq!(base.choices(), &['a']);
    /// assert_eq!(left.choices(), &['a', 'b']);
    /// assert_eq!(right.choices(), &['a', 'c']);
    /// ```
    pub fn record(&self, choice: C) -> Self {
        let mut choices = Vec::with_capacity(self.choices.len() + 1);
        choices.extend_from_slice(&self.choices);
        choices.push(choice);
        Self { choices }
    }

    /// Append a whole suffix, returning a new partial solution.
    pub fn extend(&self, suffix: &[C]) -> Self {
        let mut choices = Vec::with_capacity(self.choices.len() + suffix.len());
        choices.extend_from_slice(&self.choices);
        choices.extend_from_slice(suffix);
        Self { choices }
    }

    /// Choices recorded after the first `depth` ones.
    pub fn suffix(&self, depth: usize) -> Vec<C> {
        self.choices.get(depth..).unwrap_or_default().to_vec()
    }

    /// Seal this partial solution as a solution.
    pub fn complete(self) -> Solution<C> {
        Solution {
            choices: self.choices,
        }
    }
}

impl<C> PartialSolution<C> {
    /// Choices in the order they were made.
    pub fn choices(&self) -> &[C] {
        &self.choices
    }

    /// Number of choices made, which is also the search depth.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

/// A partial solution that reached a goal state.
///
/// Solutions are never modified after they are produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution<C> {
    choices: Vec<C>,
}

impl<C> Solution<C> {
    /// Choices in the order they were made.
    pub fn choices(&self) -> &[C] {
        &self.choices
    }

    /// Take the choices out of the solution.
    pub fn into_choices(self) -> Vec<C> {
        self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.choices.iter()
    }
}

impl<'a, C> IntoIterator for &'a Solution<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}

impl<C: fmt::Display> fmt::Display for Solution<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, choice) in self.choices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{choice}")?;
        }
        write!(f, "]")
    }
}

/// Solutions in the order the search produced them.
///
/// The order is depth-first, left to right over each problem's choice
/// order, with no reordering and no deduplication.
pub type SolutionSet<C> = Vec<Solution<C>>;

/// Strip a solution set down to plain choice vectors.
pub fn into_choice_vecs<C>(solutions: SolutionSet<C>) -> Vec<Vec<C>> {
    solutions.into_iter().map(Solution::into_choices).collect()
}
