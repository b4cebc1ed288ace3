//! Nondeterministic finite automaton with epsilon transitions.

use crate::core::{Configuration, Destinations, State, Symbol, TransitionTable};
use indexmap::IndexSet;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors for input that can never be fed to an NFA.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Epsilon symbol found in input at position {position}")]
    EpsilonInInput { position: usize },
}

/// Nondeterministic finite automaton.
///
/// Acceptance is decided by a depth-first search over every transition
/// choice. Epsilon transitions are followed before input is consumed, and
/// the search stops at the first branch that ends in a final state with
/// the input exhausted.
#[derive(Clone, Debug)]
pub struct Nfa<S: State> {
    initial: S,
    finals: IndexSet<S>,
    table: TransitionTable<S, Destinations<S>>,
}

impl<S: State> Nfa<S> {
    /// Create an automaton with no transitions.
    pub fn new(initial: S, finals: impl IntoIterator<Item = S>) -> Self {
        Self {
            initial,
            finals: finals.into_iter().collect(),
            table: TransitionTable::new(),
        }
    }

    /// Add `to` as a destination of `(from, symbol)`.
    /// Use `Symbol::EPSILON` for a transition that consumes no input.
    pub fn add_transition(&mut self, from: S, symbol: Symbol, to: S) {
        self.table.insert(from, symbol, to);
    }

    /// Remove every destination of `(from, symbol)`.
    /// Returns whether anything was removed.
    pub fn remove_transition(&mut self, from: &S, symbol: Symbol) -> bool {
        self.table.remove(from, symbol).is_some()
    }

    /// Get the destinations for this key, if any.
    pub fn lookup(&self, from: &S, symbol: Symbol) -> Option<&Destinations<S>> {
        self.table.lookup(from, symbol)
    }

    /// Get the state every run starts in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Iterate over the final states in insertion order.
    pub fn final_states(&self) -> impl Iterator<Item = &S> + '_ {
        self.finals.iter()
    }

    /// Check if `state` is final.
    pub fn is_final(&self, state: &S) -> bool {
        self.finals.contains(state)
    }

    /// Get the underlying transition table.
    pub fn transitions(&self) -> &TransitionTable<S, Destinations<S>> {
        &self.table
    }

    /// Check whether the automaton accepts `input`, one symbol per character.
    pub fn validate_string(&self, input: &str) -> bool {
        let symbols: Vec<Symbol> = input.chars().map(Symbol::from).collect();
        self.accepts(&symbols)
    }

    /// Check whether the automaton accepts a symbol sequence.
    ///
    /// The epsilon symbol is reserved for transitions and is rejected
    /// if it appears in the input.
    pub fn validate_symbols(&self, input: &[Symbol]) -> Result<bool, InputError> {
        if let Some(position) = input.iter().position(Symbol::is_empty) {
            return Err(InputError::EpsilonInInput { position });
        }
        Ok(self.accepts(input))
    }

    fn accepts(&self, input: &[Symbol]) -> bool {
        let mut search = Search {
            nfa: self,
            visited: HashSet::new(),
            pending: Vec::new(),
        };
        let accepted = search.explore(&self.initial, input);

        debug!(
            input_len = input.len(),
            branches = search.visited.len(),
            accepted,
            "nfa validation finished"
        );
        accepted
    }

    /// List states, symbols and transitions for debugging.
    pub fn describe(&self) -> Configuration {
        let mut states = vec![self.initial.name().to_string()];
        for state in &self.finals {
            Configuration::push_unique(&mut states, state.name().to_string());
        }

        let mut symbols = Vec::new();
        let mut transitions = Vec::new();
        for (from, symbol, destinations) in self.table.iter() {
            Configuration::push_unique(&mut states, from.name().to_string());
            Configuration::push_unique(&mut symbols, label(symbol));

            let mut targets: Vec<String> = Vec::new();
            for to in destinations {
                Configuration::push_unique(&mut states, to.name().to_string());
                Configuration::push_unique(&mut targets, to.name().to_string());
            }
            transitions.push(format!(
                "δ({}, {}) = {{{}}}",
                from.name(),
                label(symbol),
                targets.join(", ")
            ));
        }

        Configuration {
            states,
            symbols,
            initial: self.initial.name().to_string(),
            finals: self.finals.iter().map(|s| s.name().to_string()).collect(),
            transitions,
        }
    }
}

fn label(symbol: Symbol) -> String {
    match symbol {
        Symbol::Char(c) => c.to_string(),
        Symbol::Empty => "ε".to_string(),
    }
}

/// State of one acceptance search.
///
/// Branches wait on an explicit `pending` stack of (state, remaining
/// input length) pairs, so search depth is bounded by memory rather than
/// by the call stack. `visited` holds every pair already entered; a pair
/// is never explored twice, which also breaks epsilon cycles.
struct Search<'a, S: State> {
    nfa: &'a Nfa<S>,
    visited: HashSet<(&'a S, usize)>,
    pending: Vec<(&'a S, usize)>,
}

impl<'a, S: State> Search<'a, S> {
    /// Depth-first search from `start` over `input`.
    ///
    /// Destinations are pushed in reverse so they pop in insertion order,
    /// and epsilon moves are pushed last so they are tried before any
    /// symbol is consumed.
    fn explore(&mut self, start: &'a S, input: &[Symbol]) -> bool {
        let nfa = self.nfa;
        self.pending.push((start, input.len()));

        while let Some((state, remaining)) = self.pending.pop() {
            if !self.visited.insert((state, remaining)) {
                continue;
            }
            trace!(state = state.name(), remaining, "exploring branch");

            if remaining == 0 && nfa.is_final(state) {
                return true;
            }

            if remaining > 0 {
                let next = input[input.len() - remaining];
                if let Some(targets) = nfa.table.lookup(state, next) {
                    self.pending
                        .extend(targets.iter().rev().map(|to| (to, remaining - 1)));
                }
            }

            if let Some(targets) = nfa.table.lookup(state, Symbol::EPSILON) {
                self.pending
                    .extend(targets.iter().rev().map(|to| (to, remaining)));
            }
        }

        false
    }
}
