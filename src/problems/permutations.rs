//! Permutations of a sequence.

use super::total;
use crate::core::Problem;
use crate::engine::Enumerator;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Take the item at `index` of the unused items.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pick<T> {
    pub index: usize,
    pub item: T,
}

impl<T: fmt::Display> fmt::Display for Pick<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)
    }
}

/// Orderings of a sequence. The state is the sequence of unused items.
pub struct Permutations<T> {
    _phantom: PhantomData<T>,
}

impl<T> Permutations<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Permutations<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Debug> Problem for Permutations<T> {
    type State = Vec<T>;
    type Choice = Pick<T>;
    type Error = Infallible;

    fn name(&self) -> &str {
        "permutations"
    }

    fn is_goal(&self, unused: &Vec<T>) -> bool {
        unused.is_empty()
    }

    fn choices(&self, unused: &Vec<T>) -> Vec<Pick<T>> {
        unused
            .iter()
            .enumerate()
            .map(|(index, item)| Pick {
                index,
                item: item.clone(),
            })
            .collect()
    }

    fn transition(&self, unused: &Vec<T>, pick: &Pick<T>) -> Vec<T> {
        let mut rest = unused.clone();
        if pick.index < rest.len() {
            rest.remove(pick.index);
        }
        rest
    }

    fn label(&self, unused: &Vec<T>, pick: &Pick<T>) -> String {
        format!("{:?} (rest {:?})", pick.item, self.transition(unused, pick))
    }
}

/// Every ordering of `items`, in lexicographic order of positions.
///
/// ```rust
/// use exhaust::problems::permute;
///
/// let all = permute(&['a', 'b', 'c']);
///
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec!['a', 'b', 'c']);
/// assert_eq!(all[1], vec!['a', 'c', 'b']);
/// assert_eq!(permute::<u8>(&[]), vec![Vec::<u8>::new()]);
/// ```
pub fn permute<T: Clone + Debug>(items: &[T]) -> Vec<Vec<T>> {
    let problem = Permutations::<T>::new();
    total(Enumerator::new(&problem).enumerate(items.to_vec()))
        .into_iter()
        .map(|solution| solution.into_choices().into_iter().map(|pick| pick.item).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permute_three_letters() {
        let expected: Vec<Vec<char>> = ["abc", "acb", "bac", "bca", "cab", "cba"]
            .iter()
            .map(|s| s.chars().collect())
            .collect();

        assert_eq!(permute(&['a', 'b', 'c']), expected);
    }

    #[test]
    fn single_item_has_one_ordering() {
        assert_eq!(permute(&[42]), vec![vec![42]]);
    }

    #[test]
    fn repeated_items_are_kept_positionally() {
        // Items are picked by position, so equal items still yield n! results.
        let all = permute(&[1, 1, 2]);

        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![1, 1, 2]);
        assert_eq!(all[2], vec![1, 1, 2]);
    }

    #[test]
    fn transition_removes_picked_index() {
        let problem = Permutations::<char>::new();
        let unused = vec!['x', 'y', 'z'];
        let rest = problem.transition(
            &unused,
            &Pick {
                index: 1,
                item: 'y',
            },
        );

        assert_eq!(rest, vec!['x', 'z']);
        assert_eq!(unused, vec!['x', 'y', 'z']);
    }

    #[test]
    fn solutions_keep_pick_indices() {
        let problem = Permutations::<&str>::new();
        let solutions = total(Enumerator::new(&problem).enumerate(vec!["p", "q"]));
        let last: Vec<usize> = solutions[1].iter().map(|pick| pick.index).collect();

        // q is index 1 of [p, q]; then p is index 0 of [p].
        assert_eq!(last, vec![1, 0]);
    }

    #[test]
    fn label_shows_item_and_rest() {
        let problem = Permutations::<i32>::new();
        let label = problem.label(&vec![1, 2, 3], &Pick { index: 0, item: 1 });
        assert_eq!(label, "1 (rest [2, 3])");
    }
}
