//! Making change from a set of denominations.

use super::total;
use crate::builder::BuildError;
use crate::core::{into_choice_vecs, Problem};
use crate::engine::Enumerator;
use crate::graph::GraphEnumeration;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;

/// Use `count` coins of `denomination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tender {
    pub denomination: i64,
    pub count: i64,
}

impl Tender {
    pub fn value(&self) -> i64 {
        self.denomination * self.count
    }
}

impl fmt::Display for Tender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}x{}", self.denomination, self.count)
    }
}

/// How denominations are consumed while descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tendering {
    /// Each denomination is used one or more times, and only denominations
    /// listed after it remain available. Every multiset of coins comes out
    /// exactly once.
    #[default]
    Combinations,
    /// Each denomination is used zero or more times, and every other
    /// denomination remains available. Explores the full decision tree,
    /// duplicates included; meant for drawing it.
    Exhaustive,
}

/// Amount still owed and the denominations still available.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Till {
    pub amount: i64,
    pub denominations: Vec<i64>,
}

/// Ways to make change for an amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    denominations: Vec<i64>,
    tendering: Tendering,
}

impl Change {
    /// Change-making over distinct positive denominations.
    pub fn new(denominations: Vec<i64>) -> Result<Self, BuildError> {
        let mut seen = HashSet::new();
        for &denomination in &denominations {
            if denomination <= 0 {
                return Err(BuildError::NonPositiveDenomination(denomination));
            }
            if !seen.insert(denomination) {
                return Err(BuildError::DuplicateDenomination(denomination));
            }
        }
        Ok(Self {
            denominations,
            tendering: Tendering::default(),
        })
    }

    pub fn with_tendering(mut self, tendering: Tendering) -> Self {
        self.tendering = tendering;
        self
    }

    pub fn denominations(&self) -> &[i64] {
        &self.denominations
    }

    pub fn tendering(&self) -> Tendering {
        self.tendering
    }

    /// Starting state for `amount` with every denomination available.
    pub fn initial(&self, amount: i64) -> Till {
        Till {
            amount,
            denominations: self.denominations.clone(),
        }
    }

    fn counts(&self, amount: i64, denomination: i64) -> std::ops::RangeInclusive<i64> {
        let most = amount / denomination;
        match self.tendering {
            Tendering::Combinations => 1..=most,
            Tendering::Exhaustive => 0..=most,
        }
    }

    fn remaining_after(&self, denominations: &[i64], used: i64) -> Vec<i64> {
        match self.tendering {
            Tendering::Combinations => denominations
                .iter()
                .position(|&d| d == used)
                .map(|i| denominations[i + 1..].to_vec())
                .unwrap_or_default(),
            Tendering::Exhaustive => denominations
                .iter()
                .copied()
                .filter(|&d| d != used)
                .collect(),
        }
    }
}

impl Problem for Change {
    type State = Till;
    type Choice = Tender;
    type Error = Infallible;

    fn name(&self) -> &str {
        "change"
    }

    fn is_goal(&self, till: &Till) -> bool {
        till.amount == 0
    }

    fn is_infeasible(&self, till: &Till) -> bool {
        till.amount < 0
    }

    fn choices(&self, till: &Till) -> Vec<Tender> {
        if till.amount <= 0 {
            return Vec::new();
        }
        till.denominations
            .iter()
            .flat_map(|&denomination| {
                self.counts(till.amount, denomination)
                    .map(move |count| Tender {
                        denomination,
                        count,
                    })
            })
            .collect()
    }

    fn transition(&self, till: &Till, tender: &Tender) -> Till {
        Till {
            amount: till.amount - tender.value(),
            denominations: self.remaining_after(&till.denominations, tender.denomination),
        }
    }

    fn label(&self, till: &Till, tender: &Tender) -> String {
        let next = self.transition(till, tender);
        format!(
            "{} x ${} ({} remaining)(options {:?})",
            tender.count, tender.denomination, next.amount, next.denominations
        )
    }

    fn terminal_label(&self, till: &Till) -> String {
        format!("{} remaining -", till.amount)
    }

    fn dead_end_label(&self, till: &Till) -> String {
        if till.denominations.is_empty() {
            format!("{} remaining - No Options Available", till.amount)
        } else {
            format!("{} remaining - No Range Available", till.amount)
        }
    }
}

/// Every combination of denominations adding up to `amount`.
///
/// Each solution lists denomination-count pairs in the order the
/// denominations were given. No multiset appears twice.
///
/// ```rust
/// use exhaust::problems::{change, Tender};
///
/// let ways = change(10, &[2, 3, 5]).unwrap();
///
/// assert!(ways.contains(&vec![Tender { denomination: 2, count: 5 }]));
/// assert!(ways.contains(&vec![Tender { denomination: 5, count: 2 }]));
/// assert_eq!(change(0, &[2, 3, 5]).unwrap(), vec![Vec::<Tender>::new()]);
/// ```
pub fn change(amount: i64, denominations: &[i64]) -> Result<Vec<Vec<Tender>>, BuildError> {
    let problem = Change::new(denominations.to_vec())?;
    let solutions = total(Enumerator::new(&problem).enumerate(problem.initial(amount)));
    Ok(into_choice_vecs(solutions))
}

/// Full decision tree of exhaustive tendering, recorded as a graph.
///
/// ```rust
/// use exhaust::problems::change_graph;
///
/// let run = change_graph(10, &[10, 5]).unwrap();
///
/// assert_eq!(run.graph.len(), 19);
/// assert_eq!(run.goal_paths().count(), 4);
/// assert!(run.graph.to_dot().starts_with("digraph {\n0[label=\"0 x $10 (10 remaining)(options [5])\"]\n"));
/// ```
pub fn change_graph(amount: i64, denominations: &[i64]) -> Result<GraphEnumeration, BuildError> {
    let problem = Change::new(denominations.to_vec())?.with_tendering(Tendering::Exhaustive);
    Ok(total(
        Enumerator::new(&problem).enumerate_graph(problem.initial(amount)),
    ))
}
