//! Core automaton contracts.
//!
//! This module contains the pieces the automaton is written against:
//! - Accepting sets via the `Accepting` trait
//! - Transition functions via the `Delta` alias
//! - The default domain error for rejected `(state, symbol)` pairs
//! - `Step` records produced when tracing a run

mod accepting;
mod step;
mod transition;

pub use accepting::{AcceptIf, Accepting};
pub use step::Step;
pub use transition::{Delta, TransitionError};
