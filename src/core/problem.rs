//! The `Problem` trait implemented by every enumerable problem.
//!
//! A problem describes its search space through pure functions over a
//! remaining state: which states are goals, which are hopeless, which
//! choices are available next and where each choice leads. The engine
//! never inspects states or choices beyond cloning them and handing them
//! back to the problem.

use std::fmt::Debug;

/// Adapter between a concrete combinatorial problem and the enumerator.
///
/// All methods are pure. For a search to terminate, every `transition`
/// must move the state strictly closer to a goal or to an infeasible
/// state; the engine does no cycle detection of its own.
///
/// # Example
///
/// ```rust
/// use exhaust::core::Problem;
/// use std::convert::Infallible;
///
/// /// Binary strings of a fixed length.
/// struct Bits;
///
/// impl Problem for Bits {
///     type State = usize;
///     type Choice = u8;
///     type Error = Infallible;
///
///     fn name(&self) -> &str {
///         "bits"
///     }
///
///     fn is_goal(&self, left: &usize) -> bool {
///         *left == 0
///     }
///
///     fn choices(&self, _left: &usize) -> Vec<u8> {
///         vec![0, 1]
///     }
///
///     fn transition(&self, left: &usize, _bit: &u8) -> usize {
///         left - 1
///     }
/// }
///
/// assert!(Bits.is_goal(&0));
/// assert_eq!(Bits.transition(&3, &1), 2);
/// ```
pub trait Problem {
    /// Everything still undecided. Each branch works on its own clone.
    type State: Clone + Debug;

    /// One atomic decision. Appended to partial solutions as-is.
    type Choice: Clone + Debug;

    /// Raised by a capability the problem cannot provide.
    ///
    /// Problems whose functions are total use `std::convert::Infallible`.
    type Error;

    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Whether `state` is a complete, valid solution.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Whether `state` can never reach a goal.
    ///
    /// Checked after `is_goal`. Default implementation returns `false`.
    fn is_infeasible(&self, _state: &Self::State) -> bool {
        false
    }

    /// Ordered choices available from `state`.
    ///
    /// The order is authoritative: solutions come out depth-first in
    /// exactly this order.
    fn choices(&self, state: &Self::State) -> Vec<Self::Choice>;

    /// State reached by applying `choice` to `state`.
    fn transition(&self, state: &Self::State, choice: &Self::Choice) -> Self::State;

    /// Constraint check run before a choice is accepted.
    ///
    /// Default implementation accepts every choice.
    fn accepts(&self, _state: &Self::State, _choice: &Self::Choice) -> Result<bool, Self::Error> {
        Ok(true)
    }

    /// Diagnostic label for the node reached by taking `choice` from `state`.
    fn label(&self, _state: &Self::State, choice: &Self::Choice) -> String {
        format!("{choice:?}")
    }

    /// Label for a goal or infeasible leaf.
    fn terminal_label(&self, state: &Self::State) -> String {
        format!("{state:?}")
    }

    /// Label for a state that is neither terminal nor has any choices left.
    fn dead_end_label(&self, state: &Self::State) -> String {
        format!("{state:?} - no choices")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Countdown;

    impl Problem for Countdown {
        type State = i32;
        type Choice = i32;
        type Error = Infallible;

        fn name(&self) -> &str {
            "countdown"
        }

        fn is_goal(&self, state: &i32) -> bool {
            *state == 0
        }

        fn is_infeasible(&self, state: &i32) -> bool {
            *state < 0
        }

        fn choices(&self, _state: &i32) -> Vec<i32> {
            vec![1, 2]
        }

        fn transition(&self, state: &i32, choice: &i32) -> i32 {
            state - choice
        }
    }

    #[test]
    fn default_accepts_everything() {
        assert_eq!(Countdown.accepts(&5, &1), Ok(true));
        assert_eq!(Countdown.accepts(&-1, &2), Ok(true));
    }

    #[test]
    fn default_labels_use_debug_output() {
        assert_eq!(Countdown.label(&3, &2), "2");
        assert_eq!(Countdown.terminal_label(&0), "0");
        assert_eq!(Countdown.dead_end_label(&4), "4 - no choices");
    }

    #[test]
    fn transition_is_pure() {
        let state = 5;
        let next = Countdown.transition(&state, &2);

        assert_eq!(state, 5);
        assert_eq!(next, 3);
        assert_eq!(Countdown.transition(&state, &2), next);
    }

    #[test]
    fn goal_and_infeasible_are_disjoint_here() {
        assert!(Countdown.is_goal(&0));
        assert!(!Countdown.is_infeasible(&0));
        assert!(Countdown.is_infeasible(&-1));
        assert!(!Countdown.is_goal(&-1));
    }
}
