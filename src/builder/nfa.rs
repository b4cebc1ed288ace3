//! Builder for constructing NFAs.

use crate::builder::error::BuildError;
use crate::core::{State, StateId, Symbol};
use crate::nfa::Nfa;
use tracing::debug;

/// Builder for constructing an [`Nfa`] with a fluent API.
pub struct NfaBuilder<S: State> {
    initial: Option<S>,
    finals: Vec<S>,
    transitions: Vec<(S, Symbol, S)>,
}

impl<S: State> NfaBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            finals: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, state: S) -> Self {
        self.finals.push(state);
        self
    }

    /// Mark several states as final.
    pub fn final_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.finals.extend(states);
        self
    }

    /// Add a transition on one symbol.
    pub fn transition(mut self, from: S, symbol: impl Into<Symbol>, to: S) -> Self {
        self.transitions.push((from, symbol.into(), to));
        self
    }

    /// Add an epsilon transition.
    pub fn epsilon(self, from: S, to: S) -> Self {
        self.transition(from, Symbol::EPSILON, to)
    }

    /// Add one transition per character in `chars`, all with the same endpoints.
    pub fn transitions_on(mut self, from: S, chars: &str, to: S) -> Self {
        for c in chars.chars() {
            self.transitions.push((from.clone(), Symbol::from(c), to.clone()));
        }
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Nfa<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        debug!(
            initial = initial.name(),
            finals = self.finals.len(),
            transitions = self.transitions.len(),
            "building nfa"
        );

        let mut nfa = Nfa::new(initial, self.finals);
        for (from, symbol, to) in self.transitions {
            nfa.add_transition(from, symbol, to);
        }
        Ok(nfa)
    }
}

impl NfaBuilder<StateId> {
    /// Add a transition written as strings, e.g. `("1", "", "5")` for an
    /// epsilon move. Blank state names and multi-character symbols are
    /// rejected.
    pub fn parsed_transition(self, from: &str, symbol: &str, to: &str) -> Result<Self, BuildError> {
        let from = StateId::new(from)?;
        let symbol = Symbol::try_from(symbol)?;
        let to = StateId::new(to)?;
        Ok(self.transition(from, symbol, to))
    }
}

impl<S: State> Default for NfaBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
