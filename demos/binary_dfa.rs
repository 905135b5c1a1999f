//! Binary DFA
//!
//! Four states, binary input. Accepting states are `A` and `C`.
//!
//! Key concepts:
//! - The transition function is an ordinary closure
//! - Side effects inside the transition function (here, printing the path)
//! - Invalid `(state, symbol)` pairs reported as errors, not panics
//!
//! Run with: cargo run --example binary_dfa
//! Set RUST_LOG=trace to see every transition logged.

use dfa::{Automaton, TransitionError};
use std::collections::HashSet;
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut dfa: Automaton<char, u8> = Automaton::new('A', HashSet::from(['A', 'C']));
    dfa.set_transition(|state: &char, symbol: &u8| {
        let next = match (state, symbol) {
            ('A', 0) => 'B',
            ('A', 1) => 'C',
            ('B', 0) => 'B',
            ('B', 1) => 'C',
            ('C', 0) => 'D',
            ('C', 1) => 'C',
            ('D', 0) => 'A',
            ('D', 1) => 'C',
            _ => return Err(TransitionError::invalid(state, symbol)),
        };
        print!("{next}");
        Ok(next)
    });

    let accepted = dfa.feed_all([0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0])?;
    std::io::stdout().flush()?;
    println!();
    println!("{accepted:?}");

    match dfa.feed(2) {
        Ok(_) => println!("unexpectedly accepted symbol 2"),
        Err(err) => println!("rejected: {err} (still in state {})", dfa.state()),
    }

    Ok(())
}
