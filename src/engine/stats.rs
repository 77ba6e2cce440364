//! Statistics gathered during one top-level enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters for one top-level enumeration call.
///
/// Reset at the start of every call to `enumerate`, `enumerate_from`,
/// `count` or `enumerate_graph`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Recursive calls made, one per state visited.
    pub nodes_visited: u64,
    /// Choices rejected by a constraint check or a guard.
    pub pruned: u64,
    /// Non-terminal states that offered no choices.
    pub dead_ends: u64,
    /// Goal states reached.
    pub solutions: usize,
    /// States answered from the memo.
    pub memo_hits: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for EnumerationStats {
    fn default() -> Self {
        Self::begin()
    }
}

impl EnumerationStats {
    /// Fresh counters stamped with the current time.
    pub fn begin() -> Self {
        Self {
            nodes_visited: 0,
            pruned: 0,
            dead_ends: 0,
            solutions: 0,
            memo_hits: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub(crate) fn finish(&mut self, solutions: usize) {
        self.solutions = solutions;
        self.finished_at = Some(Utc::now());
    }

    /// Wall time of the enumeration, once it has finished.
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at
            .and_then(|end| end.signed_duration_since(self.started_at).to_std().ok())
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_starts_at_zero() {
        let stats = EnumerationStats::begin();

        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.pruned, 0);
        assert_eq!(stats.solutions, 0);
        assert!(!stats.is_finished());
        assert!(stats.duration().is_none());
    }

    #[test]
    fn finish_records_solutions_and_time() {
        let mut stats = EnumerationStats::begin();
        std::thread::sleep(Duration::from_millis(5));
        stats.finish(4);

        assert_eq!(stats.solutions, 4);
        assert!(stats.is_finished());
        assert!(stats.duration().unwrap() >= Duration::from_millis(5));
    }

    #[test]
    fn stats_serialize_correctly() {
        let mut stats = EnumerationStats::begin();
        stats.nodes_visited = 12;
        stats.finish(3);

        let json = serde_json::to_string(&stats).unwrap();
        let back: EnumerationStats = serde_json::from_str(&json).unwrap();

        assert_eq!(back, stats);
    }
}
