//! Memoization hook for the enumerator.
//!
//! A memo maps a remaining state to the solution suffixes reachable from
//! it. Suffixes do not depend on how the state was reached, so a hit can
//! be spliced onto any prefix without changing the ordered result.

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for solution suffixes keyed by remaining state.
pub trait Memo<S, C> {
    /// Suffixes previously stored for `state`, if any.
    fn recall(&self, state: &S) -> Option<&[Vec<C>]>;

    /// Store the ordered suffixes reachable from `state`.
    fn remember(&mut self, state: &S, suffixes: Vec<Vec<C>>);

    /// Forget every stored suffix.
    fn clear(&mut self);

    /// Whether the enumerator should bother computing suffixes to store.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Memo that stores nothing. The default for every enumerator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoMemo;

impl<S, C> Memo<S, C> for NoMemo {
    fn recall(&self, _state: &S) -> Option<&[Vec<C>]> {
        None
    }

    fn remember(&mut self, _state: &S, _suffixes: Vec<Vec<C>>) {}

    fn clear(&mut self) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Hash table of suffixes for problems with hashable states.
///
/// # Example
///
/// ```rust
/// use exhaust::engine::{Memo, SuffixTable};
///
/// let mut table: SuffixTable<i64, i64> = SuffixTable::new();
/// table.remember(&2, vec![vec![1, 1], vec![2]]);
///
/// assert_eq!(table.recall(&2), Some(&[vec![1, 1], vec![2]][..]));
/// assert_eq!(table.recall(&3), None);
/// ```
#[derive(Clone, Debug)]
pub struct SuffixTable<S, C> {
    table: HashMap<S, Vec<Vec<C>>>,
}

impl<S, C> Default for SuffixTable<S, C> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<S: Hash + Eq, C> SuffixTable<S, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states stored.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: Hash + Eq + Clone, C> Memo<S, C> for SuffixTable<S, C> {
    fn recall(&self, state: &S) -> Option<&[Vec<C>]> {
        self.table.get(state).map(Vec::as_slice)
    }

    fn remember(&mut self, state: &S, suffixes: Vec<Vec<C>>) {
        self.table.insert(state.clone(), suffixes);
    }

    fn clear(&mut self) {
        self.table.clear();
    }
}
