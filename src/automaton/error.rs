//! Errors returned when feeding input to an automaton.

use thiserror::Error;

/// Errors that can occur when feeding a symbol.
///
/// `E` is whatever error type the transition function returns. It is passed
/// through as-is so callers can match on their own domain errors.
#[derive(Debug, Error, PartialEq)]
pub enum FeedError<E> {
    #[error("Transition function not set. Call .set_transition(f) before feeding input")]
    Unconfigured,

    #[error("{0}")]
    Transition(E),
}

impl<E> FeedError<E> {
    /// True when the automaton had no transition function attached.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, FeedError::Unconfigured)
    }

    /// Borrow the transition function's error, if that is what failed.
    pub fn transition_error(&self) -> Option<&E> {
        match self {
            FeedError::Transition(err) => Some(err),
            FeedError::Unconfigured => None,
        }
    }

    /// Take the transition function's error, if that is what failed.
    pub fn into_transition(self) -> Option<E> {
        match self {
            FeedError::Transition(err) => Some(err),
            FeedError::Unconfigured => None,
        }
    }
}
