//! Macros for writing transition functions as tables.

/// Build a transition function from a table of `(state, symbol) => next` rows.
///
/// Each row is a pair of patterns and an expression for the next state. The
/// generated closure returns the first matching row's state, and
/// [`TransitionError::Invalid`](crate::core::TransitionError::Invalid) for any
/// pair the table does not list.
///
/// Patterns are matched against the state and symbol values, not references
/// to them, so literals of any type work, `&str` included. A plain binding
/// such as `n` copies the value and needs `Copy`; use `ref n` to borrow a
/// state like `String` instead.
///
/// # Example
///
/// ```
/// use dfa::{transition_table, Automaton, TransitionError};
/// use std::collections::HashSet;
///
/// let mut dfa: Automaton<char, u8> = Automaton::new('A', HashSet::from(['A', 'C']));
/// dfa.set_transition(transition_table! {
///     ('A', 0) => 'B',
///     ('A' | 'B' | 'C' | 'D', 1) => 'C',
///     ('B', 0) => 'B',
///     ('C', 0) => 'D',
///     ('D', 0) => 'A',
/// });
///
/// assert_eq!(dfa.feed(1), Ok(true));
/// assert_eq!(
///     dfa.feed(7).unwrap_err().into_transition(),
///     Some(TransitionError::invalid(&'C', &7u8))
/// );
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            ($from:pat, $symbol:pat) => $to:expr
        ),* $(,)?
    ) => {
        |state: &_, symbol: &_| match (state, symbol) {
            $(
                #[allow(unused_parens)]
                (&($from), &($symbol)) => ::core::result::Result::Ok($to),
            )*
            #[allow(unreachable_patterns)]
            (state, symbol) => ::core::result::Result::Err(
                $crate::core::TransitionError::invalid(state, symbol),
            ),
        }
    };
}
