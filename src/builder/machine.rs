//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::BuildError;
use crate::core::{Delta, TransitionError};
use std::collections::HashSet;

/// Builder for constructing automata with a fluent API.
///
/// Unlike [`Automaton::new`], which allows the transition function to be
/// attached later, the builder only hands out automata that are ready to be
/// fed.
///
/// # Example
///
/// ```rust
/// use dfa::{transition_table, AutomatonBuilder};
///
/// let mut dfa = AutomatonBuilder::<&str, char>::new()
///     .start("even")
///     .accept("even")
///     .transition(transition_table! {
///         ("even", 'a') => "odd",
///         ("odd", 'a') => "even",
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.accepts("aaaa".chars()), Ok(true));
/// assert_eq!(dfa.accepts("a".chars()), Ok(false));
/// ```
pub struct AutomatonBuilder<S, A, E = TransitionError, F = HashSet<S>> {
    start: Option<S>,
    finals: F,
    delta: Option<Delta<S, A, E>>,
}

impl<S, A, E, F: Default> AutomatonBuilder<S, A, E, F> {
    /// Create a new builder with an empty accepting set.
    pub fn new() -> Self {
        Self::with_finals(F::default())
    }
}

impl<S, A, E, F> AutomatonBuilder<S, A, E, F> {
    /// Create a new builder around an existing accepting set.
    ///
    /// Use this for accepting sets without a `Default`, such as
    /// [`AcceptIf`](crate::AcceptIf) predicates.
    pub fn with_finals(finals: F) -> Self {
        Self {
            start: None,
            finals,
            delta: None,
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Replace the accepting set.
    pub fn finals(mut self, finals: F) -> Self {
        self.finals = finals;
        self
    }

    /// Add one state to the accepting set.
    pub fn accept(mut self, state: S) -> Self
    where
        F: Extend<S>,
    {
        self.finals.extend(std::iter::once(state));
        self
    }

    /// Add several states to the accepting set.
    pub fn accept_all<I>(mut self, states: I) -> Self
    where
        F: Extend<S>,
        I: IntoIterator<Item = S>,
    {
        self.finals.extend(states);
        self
    }

    /// Set the transition function (required).
    pub fn transition<T>(mut self, transition: T) -> Self
    where
        T: FnMut(&S, &A) -> Result<S, E> + Send + 'static,
    {
        self.delta = Some(Box::new(transition));
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Automaton<S, A, E, F>, BuildError>
    where
        S: Clone,
    {
        let start = self.start.ok_or(BuildError::MissingStart)?;
        let delta = self.delta.ok_or(BuildError::MissingTransition)?;

        Ok(Automaton::new(start, self.finals).with_delta(delta))
    }
}

impl<S, A, E, F: Default> Default for AutomatonBuilder<S, A, E, F> {
    fn default() -> Self {
        Self::new()
    }
}
