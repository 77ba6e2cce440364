//! Depth-first enumerator over any `Problem`.

use crate::core::{Guard, PartialSolution, Problem, SolutionSet};
use crate::engine::memo::{Memo, NoMemo};
use crate::engine::stats::EnumerationStats;
use crate::graph::{GraphEnumeration, GraphRecorder, NodeId, NodeKind};
use tracing::{info, trace};

/// Exhaustive depth-first search driver.
///
/// For every state the enumerator asks the problem, in this order:
/// 1. `is_goal` - the current partial solution is emitted
/// 2. `is_infeasible` - the branch contributes nothing
/// 3. `choices` - each accepted choice is applied and explored
///
/// Results come out in depth-first, left-to-right choice order. Each
/// branch receives its own copy of the state and of the partial
/// solution, so siblings never see each other's choices.
///
/// # Example
///
/// ```rust
/// use exhaust::engine::Enumerator;
/// use exhaust::problems::Steps;
///
/// let steps = Steps::default();
/// let mut enumerator = Enumerator::new(&steps);
///
/// let solutions = enumerator.enumerate(3).unwrap();
/// let paths: Vec<Vec<i64>> = solutions.into_iter().map(|s| s.into_choices()).collect();
///
/// assert_eq!(paths, vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]);
/// assert_eq!(enumerator.stats().solutions, 4);
/// ```
pub struct Enumerator<'p, P: Problem, M = NoMemo> {
    problem: &'p P,
    guards: Vec<Guard<P::State>>,
    memo: M,
    stats: EnumerationStats,
}

impl<'p, P: Problem> Enumerator<'p, P, NoMemo> {
    /// Create an enumerator with no guards and no memo.
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            guards: Vec::new(),
            memo: NoMemo,
            stats: EnumerationStats::begin(),
        }
    }
}

impl<'p, P: Problem, M: Memo<P::State, P::Choice>> Enumerator<'p, P, M> {
    /// Replace the memo.
    pub fn with_memo<N: Memo<P::State, P::Choice>>(self, memo: N) -> Enumerator<'p, P, N> {
        Enumerator {
            problem: self.problem,
            guards: self.guards,
            memo,
            stats: self.stats,
        }
    }

    /// Attach a pruning guard. Child states failing it are not explored.
    ///
    /// Stored suffixes were computed without this guard, so the memo is
    /// cleared.
    pub fn guard(mut self, guard: Guard<P::State>) -> Self {
        self.guards.push(guard);
        self.memo.clear();
        self
    }

    pub fn problem(&self) -> &P {
        self.problem
    }

    pub fn memo(&self) -> &M {
        &self.memo
    }

    /// Statistics of the most recent top-level call.
    pub fn stats(&self) -> &EnumerationStats {
        &self.stats
    }

    /// Enumerate every solution reachable from `state`.
    pub fn enumerate(&mut self, state: P::State) -> Result<SolutionSet<P::Choice>, P::Error> {
        self.enumerate_from(state, PartialSolution::new())
    }

    /// Enumerate every solution reachable from `state`, each prefixed with
    /// the choices already in `partial`.
    pub fn enumerate_from(
        &mut self,
        state: P::State,
        partial: PartialSolution<P::Choice>,
    ) -> Result<SolutionSet<P::Choice>, P::Error> {
        self.start(partial.len());
        let found = self.explore(&state, partial);
        let found = self.end(found)?;
        Ok(found.into_iter().map(PartialSolution::complete).collect())
    }

    /// Number of solutions reachable from `state`, without keeping them.
    pub fn count(&mut self, state: P::State) -> Result<usize, P::Error> {
        self.start(0);
        let total = self.tally(&state);
        self.end(total.map(Count)).map(|Count(total)| total)
    }

    /// Enumerate while recording every visited node into a fresh graph.
    ///
    /// Each returned path lists node ids from a top-level choice down to a
    /// leaf. Leaves are goal states, infeasible states and dead ends, so
    /// the paths describe the whole search tree, not only the solutions.
    /// The memo is not consulted: every visit gets its own node.
    pub fn enumerate_graph(&mut self, state: P::State) -> Result<GraphEnumeration, P::Error> {
        self.start(0);
        let mut graph = GraphRecorder::new();
        let outcome = self
            .explore_graph(&state, &mut graph)
            .map(|paths| GoalPaths::new(&graph, paths));
        let GoalPaths { paths, .. } = self.end(outcome)?;
        Ok(GraphEnumeration { paths, graph })
    }

    fn start(&mut self, prefix_len: usize) {
        self.stats = EnumerationStats::begin();
        info!(
            event = "enumeration_start",
            problem = self.problem.name(),
            prefix_len = prefix_len,
            guards = self.guards.len(),
            memoized = self.memo.is_enabled(),
        );
    }

    fn end<T: Outcome>(&mut self, result: Result<T, P::Error>) -> Result<T, P::Error> {
        match &result {
            Ok(outcome) => {
                self.stats.finish(outcome.solutions());
                info!(
                    event = "enumeration_end",
                    problem = self.problem.name(),
                    solutions = self.stats.solutions,
                    nodes_visited = self.stats.nodes_visited,
                    pruned = self.stats.pruned,
                    dead_ends = self.stats.dead_ends,
                    memo_hits = self.stats.memo_hits,
                    duration_ms = self.stats.duration().map_or(0, |d| d.as_millis() as u64),
                );
            }
            Err(_) => {
                self.stats.finish(0);
                info!(
                    event = "enumeration_failed",
                    problem = self.problem.name(),
                    nodes_visited = self.stats.nodes_visited,
                );
            }
        }
        result
    }

    /// Accept `choice` from `state` and return the child state, or `None`
    /// when a constraint check or a guard prunes it.
    fn advance(
        &mut self,
        state: &P::State,
        choice: &P::Choice,
    ) -> Result<Option<P::State>, P::Error> {
        let problem = self.problem;
        if !problem.accepts(state, choice)? {
            self.stats.pruned += 1;
            trace!(event = "pruned", reason = "constraint", choice = ?choice);
            return Ok(None);
        }

        let child = problem.transition(state, choice);
        if let Some(guard) = self.guards.iter().find(|g| !g.check(&child)) {
            self.stats.pruned += 1;
            trace!(event = "pruned", reason = "guard", guard = guard.name(), choice = ?choice);
            return Ok(None);
        }

        Ok(Some(child))
    }

    fn explore(
        &mut self,
        state: &P::State,
        partial: PartialSolution<P::Choice>,
    ) -> Result<Vec<PartialSolution<P::Choice>>, P::Error> {
        let problem = self.problem;
        self.stats.nodes_visited += 1;

        if problem.is_goal(state) {
            return Ok(vec![partial]);
        }
        if problem.is_infeasible(state) {
            return Ok(Vec::new());
        }
        if let Some(suffixes) = self.memo.recall(state) {
            self.stats.memo_hits += 1;
            trace!(event = "memo_hit", depth = partial.len(), suffixes = suffixes.len());
            return Ok(suffixes.iter().map(|suffix| partial.extend(suffix)).collect());
        }

        let choices = problem.choices(state);
        if choices.is_empty() {
            self.stats.dead_ends += 1;
        }

        let depth = partial.len();
        let mut found = Vec::new();
        for choice in choices {
            let Some(child) = self.advance(state, &choice)? else {
                continue;
            };
            found.extend(self.explore(&child, partial.record(choice))?);
        }

        if self.memo.is_enabled() {
            let suffixes = found.iter().map(|p| p.suffix(depth)).collect();
            self.memo.remember(state, suffixes);
        }
        Ok(found)
    }

    fn tally(&mut self, state: &P::State) -> Result<usize, P::Error> {
        let problem = self.problem;
        self.stats.nodes_visited += 1;

        if problem.is_goal(state) {
            return Ok(1);
        }
        if problem.is_infeasible(state) {
            return Ok(0);
        }
        if let Some(suffixes) = self.memo.recall(state) {
            self.stats.memo_hits += 1;
            return Ok(suffixes.len());
        }

        let choices = problem.choices(state);
        if choices.is_empty() {
            self.stats.dead_ends += 1;
        }

        let mut total = 0;
        for choice in choices {
            if let Some(child) = self.advance(state, &choice)? {
                total += self.tally(&child)?;
            }
        }
        Ok(total)
    }

    fn explore_graph(
        &mut self,
        state: &P::State,
        graph: &mut GraphRecorder,
    ) -> Result<Vec<Vec<NodeId>>, P::Error> {
        let problem = self.problem;
        self.stats.nodes_visited += 1;

        if problem.is_goal(state) {
            let leaf = graph.record_node(problem.terminal_label(state), NodeKind::Goal);
            return Ok(vec![vec![leaf]]);
        }
        if problem.is_infeasible(state) {
            let leaf = graph.record_node(problem.terminal_label(state), NodeKind::Infeasible);
            return Ok(vec![vec![leaf]]);
        }

        let choices = problem.choices(state);
        if choices.is_empty() {
            self.stats.dead_ends += 1;
            let leaf = graph.record_node(problem.dead_end_label(state), NodeKind::DeadEnd);
            return Ok(vec![vec![leaf]]);
        }

        let mut paths = Vec::new();
        for choice in choices {
            let Some(child) = self.advance(state, &choice)? else {
                continue;
            };

            let node = graph.record_node(problem.label(state, &choice), NodeKind::Choice);
            let below = self.explore_graph(&child, graph)?;
            for first in below.iter().filter_map(|path| path.first()) {
                graph.record_edge(node, *first);
            }

            paths.extend(below.into_iter().map(|path| {
                let mut full = Vec::with_capacity(path.len() + 1);
                full.push(node);
                full.extend(path);
                full
            }));
        }
        Ok(paths)
    }
}

/// Something that knows how many solutions it represents.
trait Outcome {
    fn solutions(&self) -> usize;
}

impl<C> Outcome for Vec<PartialSolution<C>> {
    fn solutions(&self) -> usize {
        self.len()
    }
}

struct Count(usize);

impl Outcome for Count {
    fn solutions(&self) -> usize {
        self.0
    }
}

/// Graph paths together with how many of them end in a goal leaf.
struct GoalPaths {
    paths: Vec<Vec<NodeId>>,
    goals: usize,
}

impl GoalPaths {
    fn new(graph: &GraphRecorder, paths: Vec<Vec<NodeId>>) -> Self {
        let goals = paths
            .iter()
            .filter(|path| graph.leaf_kind(path) == Some(NodeKind::Goal))
            .count();
        Self { paths, goals }
    }
}

impl Outcome for GoalPaths {
    fn solutions(&self) -> usize {
        self.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{into_choice_vecs, Guard};
    use crate::engine::SuffixTable;
    use crate::engine::EnumerationError;
    use std::convert::Infallible;

    /// Step sequences over {1, 2, 3} summing to the budget.
    struct Stairs;

    impl Problem for Stairs {
        type State = i64;
        type Choice = i64;
        type Error = Infallible;

        fn name(&self) -> &str {
            "stairs"
        }

        fn is_goal(&self, budget: &i64) -> bool {
            *budget == 0
        }

        fn is_infeasible(&self, budget: &i64) -> bool {
            *budget < 0
        }

        fn choices(&self, _budget: &i64) -> Vec<i64> {
            vec![1, 2, 3]
        }

        fn transition(&self, budget: &i64, step: &i64) -> i64 {
            budget - step
        }
    }

    /// Fails the first time a choice is checked.
    struct Broken;

    impl Problem for Broken {
        type State = u8;
        type Choice = u8;
        type Error = EnumerationError;

        fn name(&self) -> &str {
            "broken"
        }

        fn is_goal(&self, depth: &u8) -> bool {
            *depth == 2
        }

        fn choices(&self, _depth: &u8) -> Vec<u8> {
            vec![0, 1]
        }

        fn transition(&self, depth: &u8, _choice: &u8) -> u8 {
            depth + 1
        }

        fn accepts(&self, _depth: &u8, _choice: &u8) -> Result<bool, EnumerationError> {
            Err(EnumerationError::unimplemented("broken check"))
        }
    }

    /// Never offers a choice.
    struct Stuck;

    impl Problem for Stuck {
        type State = u8;
        type Choice = u8;
        type Error = Infallible;

        fn name(&self) -> &str {
            "stuck"
        }

        fn is_goal(&self, _state: &u8) -> bool {
            false
        }

        fn choices(&self, _state: &u8) -> Vec<u8> {
            Vec::new()
        }

        fn transition(&self, state: &u8, _choice: &u8) -> u8 {
            *state
        }
    }

    fn run(budget: i64) -> Vec<Vec<i64>> {
        match Enumerator::new(&Stairs).enumerate(budget) {
            Ok(solutions) => into_choice_vecs(solutions),
            Err(never) => match never {},
        }
    }

    #[test]
    fn goal_state_yields_empty_solution() {
        assert_eq!(run(0), vec![Vec::<i64>::new()]);
    }

    #[test]
    fn infeasible_state_yields_nothing() {
        assert!(run(-1).is_empty());
    }

    #[test]
    fn order_is_depth_first_by_choice() {
        assert_eq!(
            run(3),
            vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]
        );
    }

    #[test]
    fn enumerate_from_keeps_prefix() {
        let mut enumerator = Enumerator::new(&Stairs);
        let prefix = PartialSolution::from_choices(vec![7]);
        let solutions = enumerator.enumerate_from(2, prefix.clone()).unwrap();

        assert_eq!(
            into_choice_vecs(solutions),
            vec![vec![7, 1, 1], vec![7, 2]]
        );
        assert_eq!(prefix.choices(), &[7]);
    }

    #[test]
    fn stats_count_visits_and_solutions() {
        let mut enumerator = Enumerator::new(&Stairs);
        enumerator.enumerate(2).unwrap();
        let stats = enumerator.stats();

        // 2 -> {1 -> {0, -1, -2}, 0, -1}
        assert_eq!(stats.nodes_visited, 7);
        assert_eq!(stats.solutions, 2);
        assert_eq!(stats.pruned, 0);
        assert!(stats.is_finished());
    }

    #[test]
    fn stats_reset_between_calls() {
        let mut enumerator = Enumerator::new(&Stairs);
        enumerator.enumerate(5).unwrap();
        enumerator.enumerate(0).unwrap();

        assert_eq!(enumerator.stats().nodes_visited, 1);
        assert_eq!(enumerator.stats().solutions, 1);
    }

    #[test]
    fn guard_prunes_child_states() {
        let mut enumerator =
            Enumerator::new(&Stairs).guard(Guard::named("even", |b: &i64| b % 2 == 0));
        let solutions = enumerator.enumerate(4).unwrap();

        assert_eq!(into_choice_vecs(solutions), vec![vec![2, 2]]);
        assert!(enumerator.stats().pruned > 0);
    }

    #[test]
    fn memoized_results_match_plain_results() {
        let plain = run(7);

        let mut memoized = Enumerator::new(&Stairs).with_memo(SuffixTable::new());
        let solutions = memoized.enumerate(7).unwrap();

        assert_eq!(into_choice_vecs(solutions), plain);
        assert!(memoized.stats().memo_hits > 0);
        assert!(!memoized.memo().is_empty());
    }

    #[test]
    fn guard_added_after_memoized_run_is_honoured() {
        let even = Guard::named("even", |b: &i64| b % 2 == 0);
        let mut memoized = Enumerator::new(&Stairs).with_memo(SuffixTable::new());
        assert_eq!(memoized.enumerate(4).unwrap().len(), 7);
        assert!(!memoized.memo().is_empty());

        let mut guarded = memoized.guard(even);
        assert!(guarded.memo().is_empty());

        let solutions = guarded.enumerate(4).unwrap();
        assert_eq!(into_choice_vecs(solutions), vec![vec![2, 2]]);
    }

    #[test]
    fn count_matches_enumeration() {
        let mut enumerator = Enumerator::new(&Stairs);
        assert_eq!(enumerator.count(6).unwrap(), run(6).len());
        assert_eq!(enumerator.stats().solutions, run(6).len());
        assert_eq!(enumerator.count(-3).unwrap(), 0);
    }

    #[test]
    fn capability_error_aborts_enumeration() {
        let mut enumerator = Enumerator::new(&Broken);
        let result = enumerator.enumerate(0);

        assert_eq!(
            result,
            Err(EnumerationError::Unimplemented {
                capability: "broken check".to_string()
            })
        );
        assert!(enumerator.stats().is_finished());
    }

    #[test]
    fn goal_reached_before_capability_is_needed() {
        let solutions = Enumerator::new(&Broken).enumerate(2).unwrap();
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].is_empty());
    }

    #[test]
    fn dead_end_yields_nothing_and_is_counted() {
        let mut enumerator = Enumerator::new(&Stuck);
        let solutions = enumerator.enumerate(0).unwrap();

        assert!(solutions.is_empty());
        assert_eq!(enumerator.stats().dead_ends, 1);
    }

    #[test]
    fn graph_numbers_nodes_in_visit_order() {
        let mut enumerator = Enumerator::new(&Stairs);
        let run = enumerator.enumerate_graph(2).unwrap();

        // choice 1 (id 0) -> choice 1 (1) -> goal (2)
        //                 -> choice 2 (3) -> infeasible (4)
        //                 -> choice 3 (5) -> infeasible (6)
        // choice 2 (7) -> goal (8)
        // choice 3 (9) -> infeasible (10)
        let ids = |raw: &[usize]| raw.iter().copied().map(NodeId).collect::<Vec<_>>();
        assert_eq!(
            run.paths,
            vec![
                ids(&[0, 1, 2]),
                ids(&[0, 3, 4]),
                ids(&[0, 5, 6]),
                ids(&[7, 8]),
                ids(&[9, 10]),
            ]
        );
        assert_eq!(run.graph.len(), 11);
        assert_eq!(run.goal_paths().count(), 2);
        assert_eq!(enumerator.stats().solutions, 2);
    }

    #[test]
    fn graph_records_dead_end_leaf() {
        let run = Enumerator::new(&Stuck).enumerate_graph(3).unwrap();

        assert_eq!(run.paths, vec![vec![NodeId(0)]]);
        let node = run.graph.node(NodeId(0)).unwrap();
        assert_eq!(node.kind, NodeKind::DeadEnd);
        assert_eq!(node.label, "3 - no choices");
    }
}
