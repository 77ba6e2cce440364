//! Guard predicates for pruning the search.
//!
//! Guards are pure boolean functions over a remaining state. A state
//! that fails any guard attached to an enumerator is pruned before the
//! enumerator recurses into it.

use std::fmt;

/// Pure predicate that decides whether a state is worth exploring.
///
/// # Example
///
/// ```rust
/// use exhaust::core::Guard;
///
/// // Only explore budgets that stay within ten units.
/// let bounded = Guard::named("bounded", |budget: &i64| *budget <= 10);
///
/// assert!(bounded.check(&4));
/// assert!(!bounded.check(&11));
/// assert_eq!(bounded.name(), "bounded");
/// ```
pub struct Guard<S> {
    name: String,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic: memoized enumeration relies on
    /// a state being pruned the same way every time it is seen.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self::named("guard", predicate)
    }

    /// Create a guard with a name that shows up in trace logs.
    pub fn named<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows exploring this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
