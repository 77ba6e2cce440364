//! Builder for constructing enumerators.

use crate::builder::error::BuildError;
use crate::core::{Guard, Problem};
use crate::engine::{Enumerator, SuffixTable};
use std::hash::Hash;

/// Builder for constructing enumerators with a fluent API.
///
/// # Example
///
/// ```rust
/// use exhaust::builder::EnumeratorBuilder;
/// use exhaust::problems::Steps;
///
/// let steps = Steps::default();
/// let mut enumerator = EnumeratorBuilder::new()
///     .problem(&steps)
///     .when("within ten", |budget: &i64| *budget <= 10)
///     .build_memoized()
///     .unwrap();
///
/// assert_eq!(enumerator.count(4).unwrap(), 7);
/// ```
pub struct EnumeratorBuilder<'p, P: Problem> {
    problem: Option<&'p P>,
    guards: Vec<Guard<P::State>>,
}

impl<'p, P: Problem> EnumeratorBuilder<'p, P> {
    pub fn new() -> Self {
        Self {
            problem: None,
            guards: Vec::new(),
        }
    }

    /// Set the problem to enumerate (required).
    pub fn problem(mut self, problem: &'p P) -> Self {
        self.problem = Some(problem);
        self
    }

    /// Add a pruning guard (optional).
    pub fn guard(mut self, guard: Guard<P::State>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a pruning guard using a closure (optional).
    pub fn when<F>(mut self, name: &str, predicate: F) -> Self
    where
        F: Fn(&P::State) -> bool + Send + Sync + 'static,
    {
        self.guards.push(Guard::named(name, predicate));
        self
    }

    /// Build a plain enumerator.
    pub fn build(self) -> Result<Enumerator<'p, P>, BuildError> {
        let problem = self.problem.ok_or(BuildError::MissingProblem)?;
        Ok(self
            .guards
            .into_iter()
            .fold(Enumerator::new(problem), Enumerator::guard))
    }

    /// Build an enumerator that remembers the suffixes of every state.
    pub fn build_memoized(
        self,
    ) -> Result<Enumerator<'p, P, SuffixTable<P::State, P::Choice>>, BuildError>
    where
        P::State: Hash + Eq,
    {
        Ok(self.build()?.with_memo(SuffixTable::new()))
    }
}

impl<'p, P: Problem> Default for EnumeratorBuilder<'p, P> {
    fn default() -> Self {
        Self::new()
    }
}
