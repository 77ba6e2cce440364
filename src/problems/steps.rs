//! Step sequences summing to a budget.

use super::total;
use crate::builder::BuildError;
use crate::core::{into_choice_vecs, Problem};
use crate::engine::Enumerator;
use std::collections::HashSet;
use std::convert::Infallible;

/// Ordered sequences of step sizes that sum exactly to a budget.
///
/// The state is the budget still to cover. A budget of zero is a goal,
/// a negative budget is infeasible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Steps {
    sizes: Vec<i64>,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            sizes: vec![1, 2, 3],
        }
    }
}

impl Steps {
    /// Steps with custom sizes, tried in the given order.
    pub fn new(sizes: Vec<i64>) -> Result<Self, BuildError> {
        if sizes.is_empty() {
            return Err(BuildError::EmptyStepSizes);
        }
        let mut seen = HashSet::new();
        for &size in &sizes {
            if size <= 0 {
                return Err(BuildError::NonPositiveStepSize(size));
            }
            if !seen.insert(size) {
                return Err(BuildError::DuplicateStepSize(size));
            }
        }
        Ok(Self { sizes })
    }

    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }
}

impl Problem for Steps {
    type State = i64;
    type Choice = i64;
    type Error = Infallible;

    fn name(&self) -> &str {
        "steps"
    }

    fn is_goal(&self, budget: &i64) -> bool {
        *budget == 0
    }

    fn is_infeasible(&self, budget: &i64) -> bool {
        *budget < 0
    }

    fn choices(&self, _budget: &i64) -> Vec<i64> {
        self.sizes.clone()
    }

    fn transition(&self, budget: &i64, size: &i64) -> i64 {
        budget - size
    }

    fn label(&self, budget: &i64, size: &i64) -> String {
        format!("step {size} ({} remaining)", budget - size)
    }

    fn terminal_label(&self, budget: &i64) -> String {
        format!("{budget} remaining")
    }
}

/// Every sequence over {1, 2, 3} summing to `budget`.
///
/// ```rust
/// use exhaust::problems::steps;
///
/// assert_eq!(steps(0), vec![Vec::<i64>::new()]);
/// assert_eq!(steps(1), vec![vec![1]]);
/// assert_eq!(steps(3), vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]);
/// assert!(steps(-2).is_empty());
/// ```
pub fn steps(budget: i64) -> Vec<Vec<i64>> {
    let problem = Steps::default();
    into_choice_vecs(total(Enumerator::new(&problem).enumerate(budget)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_are_one_two_three() {
        assert_eq!(Steps::default().sizes(), &[1, 2, 3]);
    }

    #[test]
    fn custom_sizes_are_validated() {
        assert_eq!(Steps::new(Vec::new()), Err(BuildError::EmptyStepSizes));
        assert_eq!(
            Steps::new(vec![1, 0]),
            Err(BuildError::NonPositiveStepSize(0))
        );
        assert_eq!(
            Steps::new(vec![2, -1]),
            Err(BuildError::NonPositiveStepSize(-1))
        );
        assert!(Steps::new(vec![5]).is_ok());
    }

    #[test]
    fn repeated_step_size_is_rejected() {
        assert_eq!(
            Steps::new(vec![1, 2, 1]),
            Err(BuildError::DuplicateStepSize(1))
        );
        // The first offending size is reported, whichever check it fails.
        assert_eq!(
            Steps::new(vec![3, 3, 0]),
            Err(BuildError::DuplicateStepSize(3))
        );
    }

    #[test]
    fn custom_sizes_drive_choice_order() {
        let problem = Steps::new(vec![2, 1]).unwrap();
        let solutions = total(Enumerator::new(&problem).enumerate(3));

        assert_eq!(
            into_choice_vecs(solutions),
            vec![vec![2, 1], vec![1, 2], vec![1, 1, 1]]
        );
    }

    #[test]
    fn steps_of_four() {
        assert_eq!(
            steps(4),
            vec![
                vec![1, 1, 1, 1],
                vec![1, 1, 2],
                vec![1, 2, 1],
                vec![1, 3],
                vec![2, 1, 1],
                vec![2, 2],
                vec![3, 1],
            ]
        );
    }

    #[test]
    fn counts_follow_tribonacci() {
        let counts: Vec<usize> = (0..10).map(|n| steps(n).len()).collect();
        assert_eq!(counts, vec![1, 1, 2, 4, 7, 13, 24, 44, 81, 149]);
    }

    #[test]
    fn labels_show_remaining_budget() {
        let problem = Steps::default();
        assert_eq!(problem.label(&5, &2), "step 2 (3 remaining)");
        assert_eq!(problem.terminal_label(&0), "0 remaining");
    }
}
