//! Automaton that advances its state through a caller-supplied function.

use crate::automaton::error::FeedError;
use crate::core::{Accepting, Delta, Step, TransitionError};
use log::{debug, error, trace};
use std::collections::HashSet;
use std::fmt::{self, Debug};

/// Deterministic finite automaton with a pluggable transition function.
///
/// - `S`: state values
/// - `A`: input symbols
/// - `E`: error returned by the transition function for pairs it rejects
/// - `F`: accepting set, anything implementing [`Accepting<S>`]
///
/// The automaton does not validate states or symbols. The transition
/// function alone decides which pairs are legal.
///
/// Feeding takes `&mut self`, so there is no internal locking. Wrap the
/// automaton in a `Mutex` to share it between threads.
///
/// # Example
///
/// ```rust
/// use dfa::{Automaton, TransitionError};
/// use std::collections::HashSet;
///
/// // Accepts binary words with an odd number of ones
/// let mut parity: Automaton<bool, u8> = Automaton::new(false, HashSet::from([true]));
/// parity.set_transition(|odd: &bool, bit: &u8| match bit {
///     0 => Ok(*odd),
///     1 => Ok(!*odd),
///     _ => Err(TransitionError::invalid(odd, bit)),
/// });
///
/// assert_eq!(parity.feed(1), Ok(true));
/// assert_eq!(parity.feed(0), Ok(true));
/// assert_eq!(parity.feed(1), Ok(false));
/// assert!(parity.feed(2).is_err());
/// assert_eq!(parity.state(), &false);
/// ```
pub struct Automaton<S, A, E = TransitionError, F = HashSet<S>> {
    start: S,
    state: S,
    finals: F,
    delta: Option<Delta<S, A, E>>,
}

impl<S: Clone, A, E, F> Automaton<S, A, E, F> {
    /// Create an automaton in its start state with the given accepting set.
    ///
    /// No transition function is attached yet; call
    /// [`set_transition`](Self::set_transition) before feeding input.
    pub fn new(start: S, finals: F) -> Self {
        Self {
            state: start.clone(),
            start,
            finals,
            delta: None,
        }
    }

    /// Create an automaton whose accepting set starts out empty.
    ///
    /// ```rust
    /// use dfa::Automaton;
    ///
    /// let dfa: Automaton<&str, char> = Automaton::with_start("idle");
    /// assert!(!dfa.is_final());
    /// ```
    pub fn with_start(start: S) -> Self
    where
        F: Default,
    {
        Self::new(start, F::default())
    }
}

impl<S, A, E, F> Automaton<S, A, E, F> {
    /// The state the automaton was created with.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// The current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The accepting set.
    pub fn finals(&self) -> &F {
        &self.finals
    }

    /// Mutable access to the accepting set.
    ///
    /// Changes take effect on the next [`is_final`](Self::is_final) or
    /// [`feed`](Self::feed); the current state is not touched.
    pub fn finals_mut(&mut self) -> &mut F {
        &mut self.finals
    }

    /// Replace the accepting set.
    pub fn set_finals(&mut self, finals: F) {
        self.finals = finals;
    }

    /// Attach (or replace) the transition function.
    ///
    /// The function receives the current state and the symbol being fed and
    /// returns the next state, or an error if the pair has no rule. A
    /// replacement takes effect on the next symbol.
    pub fn set_transition<T>(&mut self, transition: T)
    where
        T: FnMut(&S, &A) -> Result<S, E> + Send + 'static,
    {
        self.delta = Some(Box::new(transition));
    }

    pub(crate) fn with_delta(mut self, delta: Delta<S, A, E>) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Whether a transition function is attached.
    pub fn has_transition(&self) -> bool {
        self.delta.is_some()
    }
}

impl<S, A, E, F: Accepting<S>> Automaton<S, A, E, F> {
    /// Check if the current state is a final state (pure)
    pub fn is_final(&self) -> bool {
        self.finals.accepts(&self.state)
    }
}

impl<S, A, E, F> Automaton<S, A, E, F>
where
    S: Debug,
    A: Debug,
    F: Accepting<S>,
{
    /// Consume one symbol.
    ///
    /// Calls the transition function exactly once with the current state and
    /// `symbol`, stores its result as the new state, and reports whether that
    /// state is final. If the transition function fails, its error is
    /// returned untouched inside [`FeedError::Transition`] and the state is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Unconfigured`] if no transition function is attached
    /// - [`FeedError::Transition`] if the transition function rejects the pair
    pub fn feed(&mut self, symbol: A) -> Result<bool, FeedError<E>> {
        self.step(&symbol)
    }

    /// Feed every symbol in order, collecting the acceptance result of each.
    ///
    /// Stops at the first error. Symbols consumed before the failure keep
    /// their effect on the state.
    ///
    /// ```rust
    /// use dfa::Automaton;
    ///
    /// let mut counter: Automaton<u32, u32, std::convert::Infallible, [u32; 1]> =
    ///     Automaton::new(0, [3]);
    /// counter.set_transition(|n: &u32, k: &u32| Ok(n + k));
    ///
    /// assert_eq!(counter.feed_all([1, 1, 1, 1]), Ok(vec![false, false, true, false]));
    /// ```
    pub fn feed_all<I>(&mut self, symbols: I) -> Result<Vec<bool>, FeedError<E>>
    where
        I: IntoIterator<Item = A>,
    {
        symbols
            .into_iter()
            .map(|symbol| self.step(&symbol))
            .collect()
    }

    /// Feed every symbol in order and report whether the automaton ends in a
    /// final state.
    ///
    /// An empty word leaves the state alone and reports
    /// [`is_final`](Self::is_final).
    pub fn accepts<I>(&mut self, symbols: I) -> Result<bool, FeedError<E>>
    where
        I: IntoIterator<Item = A>,
    {
        for symbol in symbols {
            self.step(&symbol)?;
        }
        Ok(self.is_final())
    }

    /// Feed every symbol in order, recording each step taken.
    ///
    /// ```rust
    /// use dfa::{Automaton, Step};
    /// use std::collections::HashSet;
    ///
    /// let mut toggle: Automaton<bool, ()> = Automaton::new(false, HashSet::from([true]));
    /// toggle.set_transition(|on: &bool, _: &()| Ok(!*on));
    ///
    /// let steps = toggle.trace([(), ()]).unwrap();
    /// assert_eq!(
    ///     steps,
    ///     vec![
    ///         Step { from: false, symbol: (), to: true, accepted: true },
    ///         Step { from: true, symbol: (), to: false, accepted: false },
    ///     ]
    /// );
    /// ```
    pub fn trace<I>(&mut self, symbols: I) -> Result<Vec<Step<S, A>>, FeedError<E>>
    where
        S: Clone,
        I: IntoIterator<Item = A>,
    {
        symbols
            .into_iter()
            .map(|symbol| -> Result<Step<S, A>, FeedError<E>> {
                let from = self.state.clone();
                let accepted = self.step(&symbol)?;
                Ok(Step {
                    from,
                    symbol,
                    to: self.state.clone(),
                    accepted,
                })
            })
            .collect()
    }

    fn step(&mut self, symbol: &A) -> Result<bool, FeedError<E>> {
        let Some(delta) = self.delta.as_mut() else {
            error!(
                "symbol {:?} fed in state {:?} before a transition function was set",
                symbol, self.state
            );
            return Err(FeedError::Unconfigured);
        };

        let next = match delta(&self.state, symbol) {
            Ok(next) => next,
            Err(err) => {
                debug!("no transition for ({:?}, {:?})", self.state, symbol);
                return Err(FeedError::Transition(err));
            }
        };

        trace!("{:?} --{:?}--> {:?}", self.state, symbol, next);
        self.state = next;
        Ok(self.is_final())
    }
}

impl<S: Debug, A, E, F: Debug> Debug for Automaton<S, A, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("start", &self.start)
            .field("state", &self.state)
            .field("finals", &self.finals)
            .field("has_transition", &self.has_transition())
            .finish()
    }
}
