//! Membership contract for final (accepting) states.
//!
//! The automaton never iterates its accepting set, it only asks whether the
//! current state belongs to it. Anything that can answer that question can
//! serve as the set of final states.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A collection of final states, queried by membership only.
///
/// # Example
///
/// ```rust
/// use dfa::Accepting;
/// use std::collections::HashSet;
///
/// let finals = HashSet::from(["A", "C"]);
///
/// assert!(finals.accepts(&"A"));
/// assert!(!finals.accepts(&"B"));
/// ```
pub trait Accepting<S> {
    /// Check whether `state` is a final state.
    fn accepts(&self, state: &S) -> bool;
}

impl<S: Eq + Hash, H: BuildHasher> Accepting<S> for HashSet<S, H> {
    fn accepts(&self, state: &S) -> bool {
        self.contains(state)
    }
}

impl<S: Ord> Accepting<S> for BTreeSet<S> {
    fn accepts(&self, state: &S) -> bool {
        self.contains(state)
    }
}

impl<S: PartialEq> Accepting<S> for Vec<S> {
    fn accepts(&self, state: &S) -> bool {
        self.contains(state)
    }
}

impl<S: PartialEq, const N: usize> Accepting<S> for [S; N] {
    fn accepts(&self, state: &S) -> bool {
        self.contains(state)
    }
}

/// Accepting set described by a predicate instead of an enumeration.
///
/// Useful when the state space is large or unbounded, e.g. "every even
/// counter value is final".
///
/// # Example
///
/// ```rust
/// use dfa::{AcceptIf, Accepting};
///
/// let even = AcceptIf::new(|n: &u32| n % 2 == 0);
///
/// assert!(even.accepts(&4));
/// assert!(!even.accepts(&7));
/// ```
pub struct AcceptIf<P> {
    predicate: P,
}

impl<P> AcceptIf<P> {
    /// Wrap a predicate as an accepting set.
    pub fn new(predicate: P) -> Self {
        AcceptIf { predicate }
    }

    /// Unwrap the predicate.
    pub fn into_inner(self) -> P {
        self.predicate
    }
}

impl<P> fmt::Debug for AcceptIf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptIf").finish_non_exhaustive()
    }
}

impl<S, P> Accepting<S> for AcceptIf<P>
where
    P: Fn(&S) -> bool,
{
    fn accepts(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}
