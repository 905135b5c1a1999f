//! The automaton: a current state advanced by a transition function.

mod error;
mod machine;

pub use error::FeedError;
pub use machine::Automaton;
