//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStart,

    #[error("Transition function not specified. Call .transition(f) before .build()")]
    MissingTransition,
}
