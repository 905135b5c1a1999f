//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `transition_table!` macro
//! for writing transition functions as lookup tables.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
