//! Transition function types.

use std::fmt::Debug;
use thiserror::Error;

/// Boxed transition function: `(current state, symbol) -> next state`.
///
/// The function is free to perform side effects (logging, counting, printing
/// the path taken); this is how transitional actions are implemented. An
/// `Err` means the pair has no rule, and the automaton keeps its state.
pub type Delta<S, A, E> = Box<dyn FnMut(&S, &A) -> Result<S, E> + Send>;

/// Default domain error for transition functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// No rule exists for this `(state, symbol)` pair
    #[error("Invalid transition ({state}, {symbol})")]
    Invalid { state: String, symbol: String },

    /// The transition function refused the input for its own reasons
    #[error("Transition rejected: {0}")]
    Rejected(String),
}

impl TransitionError {
    /// Build an `Invalid` error from the offending pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa::TransitionError;
    ///
    /// let err = TransitionError::invalid(&'D', &2);
    /// assert_eq!(err.to_string(), "Invalid transition ('D', 2)");
    /// ```
    pub fn invalid<S: Debug, A: Debug>(state: &S, symbol: &A) -> Self {
        TransitionError::Invalid {
            state: format!("{state:?}"),
            symbol: format!("{symbol:?}"),
        }
    }
}
