//! DFA: a small deterministic finite automaton
//!
//! A deterministic finite automaton is usually written as `(S, E, d, s0, F)`:
//! a set of states, an input alphabet, a transition function
//! `d: S x E -> S`, an initial state and a set of final states.
//!
//! This crate keeps only the parts that need runtime representation. `S` and
//! `E` are implicit: the transition function decides which
//! `(state, symbol)` pairs are legal and reports the rest as errors. The
//! transition function may also do anything else it likes, which is how
//! transitional actions are implemented.
//!
//! # Core Concepts
//!
//! - **Automaton**: holds the current state and feeds symbols through the
//!   transition function
//! - **Accepting**: membership contract for the set of final states
//! - **Builder**: fluent construction and table-style transition functions
//!
//! # Example
//!
//! ```rust
//! use dfa::{transition_table, Automaton};
//! use std::collections::HashSet;
//!
//! let mut dfa: Automaton<char, u8> = Automaton::new('A', HashSet::from(['A', 'C']));
//! dfa.set_transition(transition_table! {
//!     ('A', 0) => 'B',
//!     ('A', 1) => 'C',
//!     ('B', 0) => 'B',
//!     ('B', 1) => 'C',
//!     ('C', 0) => 'D',
//!     ('C', 1) => 'C',
//!     ('D', 0) => 'A',
//!     ('D', 1) => 'C',
//! });
//!
//! let accepted = dfa.feed_all([0, 0, 0, 1]).unwrap();
//! assert_eq!(accepted, vec![false, false, false, true]);
//! assert_eq!(dfa.state(), &'C');
//! ```

pub mod automaton;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use automaton::{Automaton, FeedError};
pub use builder::{AutomatonBuilder, BuildError};
pub use crate::core::{AcceptIf, Accepting, Step, TransitionError};
