//! The four-state binary automaton, fed a fixed input sequence.

use dfa::{transition_table, Automaton, FeedError, TransitionError};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use test_log::test;

const INPUT: [u8; 12] = [0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0];

fn table() -> impl FnMut(&char, &u8) -> Result<char, TransitionError> + Send + 'static {
    transition_table! {
        ('A', 0) => 'B',
        ('A', 1) => 'C',
        ('B', 0) => 'B',
        ('B', 1) => 'C',
        ('C', 0) => 'D',
        ('C', 1) => 'C',
        ('D', 0) => 'A',
        ('D', 1) => 'C',
    }
}

fn binary_dfa() -> Automaton<char, u8> {
    let mut dfa = Automaton::new('A', HashSet::from(['A', 'C']));
    dfa.set_transition(table());
    dfa
}

#[test]
fn starts_in_accepting_state_a() {
    let dfa = binary_dfa();

    assert_eq!(dfa.start(), &'A');
    assert_eq!(dfa.state(), &'A');
    assert!(dfa.is_final());
}

#[test]
fn replays_reference_sequence() {
    let mut dfa = binary_dfa();

    let accepted = dfa.feed_all(INPUT).unwrap();

    assert_eq!(
        accepted,
        vec![false, false, false, true, true, true, false, true, true, true, false, true]
    );
    assert_eq!(dfa.state(), &'A');
}

#[test]
fn visits_expected_states() {
    let mut dfa = binary_dfa();

    let visited: Vec<char> = dfa
        .trace(INPUT)
        .unwrap()
        .into_iter()
        .map(|step| step.to)
        .collect();

    assert_eq!(
        visited,
        vec!['B', 'B', 'B', 'C', 'C', 'C', 'D', 'C', 'C', 'C', 'D', 'A']
    );
}

#[test]
fn side_effects_see_every_transition() {
    let printed = Arc::new(Mutex::new(String::new()));
    let out = Arc::clone(&printed);

    let mut dfa: Automaton<char, u8> = Automaton::new('A', HashSet::from(['A', 'C']));
    let mut delta = table();
    dfa.set_transition(move |state: &char, symbol: &u8| {
        let next = delta(state, symbol)?;
        out.lock().unwrap().push(next);
        Ok(next)
    });

    dfa.feed_all(INPUT).unwrap();

    assert_eq!(*printed.lock().unwrap(), "BBBCCCDCCCDA");
}

#[test]
fn feed_result_matches_is_final() {
    let mut dfa = binary_dfa();

    for symbol in INPUT {
        let accepted = dfa.feed(symbol).unwrap();
        assert_eq!(accepted, dfa.is_final());
    }
}

#[test]
fn invalid_symbol_propagates_and_keeps_state() {
    let mut dfa = binary_dfa();
    dfa.feed_all([0, 0, 1, 0]).unwrap();
    assert_eq!(dfa.state(), &'D');

    let err = dfa.feed(2).unwrap_err();

    assert_eq!(err.to_string(), "Invalid transition ('D', 2)");
    assert_eq!(
        err,
        FeedError::Transition(TransitionError::invalid(&'D', &2u8))
    );
    assert_eq!(dfa.state(), &'D');
    assert_eq!(dfa.feed(0), Ok(true));
}

#[test]
fn unconfigured_automaton_refuses_input() {
    let mut dfa: Automaton<char, u8> = Automaton::new('A', HashSet::from(['A', 'C']));

    assert!(dfa.feed(0).unwrap_err().is_unconfigured());
    assert_eq!(dfa.state(), &'A');
}

#[test]
fn accepting_set_changes_apply_immediately() {
    let mut dfa = binary_dfa();
    dfa.feed(0).unwrap();
    assert!(!dfa.is_final());

    dfa.finals_mut().insert('B');
    assert!(dfa.is_final());
    assert_eq!(dfa.feed(0), Ok(true));

    dfa.finals_mut().remove(&'B');
    assert_eq!(dfa.feed(0), Ok(false));
    assert_eq!(dfa.state(), &'B');
}
