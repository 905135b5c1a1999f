//! Records of individual steps taken during a traced run.

use serde::{Deserialize, Serialize};

/// One consumed symbol: where the automaton was, what it read, where it went.
///
/// Steps are produced by [`Automaton::trace`](crate::Automaton::trace). The
/// automaton itself keeps no history; a trace is handed to the caller and
/// forgotten.
///
/// # Example
///
/// ```rust
/// use dfa::Step;
///
/// let step = Step {
///     from: 'A',
///     symbol: 1u8,
///     to: 'C',
///     accepted: true,
/// };
/// assert_eq!(step.to, 'C');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<S, A> {
    /// State before the symbol was consumed
    pub from: S,
    /// The consumed symbol
    pub symbol: A,
    /// State returned by the transition function
    pub to: S,
    /// Whether `to` is a final state
    pub accepted: bool,
}
