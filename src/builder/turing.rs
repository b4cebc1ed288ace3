//! Builder for constructing Turing machines.

use crate::builder::error::BuildError;
use crate::core::{Direction, State, StateId, Symbol};
use crate::turing::TuringMachine;
use tracing::debug;

type Quintuple<S> = (S, Symbol, S, Symbol, Direction);

/// Builder for constructing a [`TuringMachine`] with a fluent API.
///
/// Transitions are applied in the order they were added, so a later
/// transition for the same (state, symbol) pair replaces an earlier one.
pub struct TuringMachineBuilder<S: State> {
    initial: Option<S>,
    finals: Vec<S>,
    transitions: Vec<Quintuple<S>>,
}

impl<S: State> TuringMachineBuilder<S> {
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

    /// Add a transition: in `from` reading `read`, write `write`, move
    /// `direction` and switch to `to`.
    pub fn transition(
        mut self,
        from: S,
        read: impl Into<Symbol>,
        to: S,
        write: impl Into<Symbol>,
        direction: Direction,
    ) -> Self {
        self.transitions
            .push((from, read.into(), to, write.into(), direction));
        self
    }

    /// Build the machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<TuringMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        debug!(
            initial = initial.name(),
            finals = self.finals.len(),
            transitions = self.transitions.len(),
            "building turing machine"
        );

        let mut machine = TuringMachine::new(initial, self.finals);
        for (from, read, to, write, direction) in self.transitions {
            machine.add_transition(from, read, to, write, direction);
        }
        Ok(machine)
    }
}

impl TuringMachineBuilder<StateId> {
    /// Add a transition written as strings, e.g. `("4", "", "0", "", "R")`.
    pub fn parsed_transition(
        self,
        from: &str,
        read: &str,
        to: &str,
        write: &str,
        direction: &str,
    ) -> Result<Self, BuildError> {
        let from = StateId::new(from)?;
        let read = Symbol::try_from(read)?;
        let to = StateId::new(to)?;
        let write = Symbol::try_from(write)?;
        let direction = Direction::try_from(direction)?;
        Ok(self.transition(from, read, to, write, direction))
    }
}

impl<S: State> Default for TuringMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
