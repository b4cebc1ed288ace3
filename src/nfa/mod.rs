//! Nondeterministic finite automaton engine.
//!
//! An [`Nfa`] owns its initial state, final states and transition table.
//! Validation borrows the automaton immutably, so one definition can be
//! shared between threads once it is built.

mod automaton;

pub use automaton::{InputError, Nfa};
