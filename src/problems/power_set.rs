//! Subsets of a set.

use super::total;
use crate::core::Problem;
use crate::engine::Enumerator;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Whether the first unused item goes into the subset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Membership<T> {
    Include(T),
    Exclude(T),
}

impl<T> Membership<T> {
    pub fn included(&self) -> Option<&T> {
        match self {
            Self::Include(item) => Some(item),
            Self::Exclude(_) => None,
        }
    }

    pub fn into_included(self) -> Option<T> {
        match self {
            Self::Include(item) => Some(item),
            Self::Exclude(_) => None,
        }
    }
}

/// All subsets of a sequence of items.
///
/// Every state offers exactly two choices on its first item, include
/// then exclude, and both continue on the tail.
pub struct PowerSet<T> {
    _phantom: PhantomData<T>,
}

impl<T> PowerSet<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for PowerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Debug> Problem for PowerSet<T> {
    type State = Vec<T>;
    type Choice = Membership<T>;
    type Error = Infallible;

    fn name(&self) -> &str {
        "power_set"
    }

    fn is_goal(&self, unused: &Vec<T>) -> bool {
        unused.is_empty()
    }

    fn choices(&self, unused: &Vec<T>) -> Vec<Membership<T>> {
        match unused.first() {
            Some(first) => vec![
                Membership::Include(first.clone()),
                Membership::Exclude(first.clone()),
            ],
            None => Vec::new(),
        }
    }

    fn transition(&self, unused: &Vec<T>, _membership: &Membership<T>) -> Vec<T> {
        unused.get(1..).unwrap_or_default().to_vec()
    }
}

/// Every subset of `items`, those containing the first item first.
///
/// ```rust
/// use exhaust::problems::power_set;
///
/// assert_eq!(
///     power_set(&[1, 2]),
///     vec![vec![1, 2], vec![1], vec![2], vec![]]
/// );
/// ```
pub fn power_set<T: Clone + Debug>(items: &[T]) -> Vec<Vec<T>> {
    let problem = PowerSet::<T>::new();
    total(Enumerator::new(&problem).enumerate(items.to_vec()))
        .into_iter()
        .map(|solution| {
            solution
                .into_choices()
                .into_iter()
                .filter_map(Membership::into_included)
                .collect()
        })
        .collect()
}
