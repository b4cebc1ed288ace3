//! Single-tape deterministic Turing machine.

use crate::core::{Action, Configuration, Direction, State, Symbol, TransitionTable};
use crate::turing::limits::{ExecutionError, RunLimits};
use crate::turing::tape::Tape;
use indexmap::IndexSet;
use tracing::{debug, trace, warn};

/// Result of executing a single step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// A transition applied; the machine is now in this state.
    Transitioned(S),

    /// No transition exists for the current state and symbol.
    Halted(S),
}

/// Deterministic single-tape Turing machine.
///
/// The machine halts only when no transition is defined for the current
/// (state, symbol) pair. Acceptance is decided afterwards by whether the
/// halting state is final; passing through a final state does not stop it.
///
/// # Example
///
/// ```rust
/// use automata::core::{Direction, StateId, Symbol};
/// use automata::turing::TuringMachine;
///
/// // Replace every 'a' with 'b', accept at the first blank.
/// let mut machine = TuringMachine::new(StateId::from(0u32), [StateId::from(1u32)]);
/// machine.add_transition(StateId::from(0u32), Symbol::from('a'), StateId::from(0u32), Symbol::from('b'), Direction::Right);
/// machine.add_transition(StateId::from(0u32), Symbol::BLANK, StateId::from(1u32), Symbol::BLANK, Direction::Left);
///
/// let run = machine.run("aaa");
/// assert!(run.accepted());
/// assert_eq!(run.read_tape(false), "bbb");
/// ```
#[derive(Clone, Debug)]
pub struct TuringMachine<S: State> {
    initial: S,
    finals: IndexSet<S>,
    table: TransitionTable<S, Action<S>>,
}

impl<S: State> TuringMachine<S> {
    /// Create a machine with no transitions.
    pub fn new(initial: S, finals: impl IntoIterator<Item = S>) -> Self {
        Self {
            initial,
            finals: finals.into_iter().collect(),
            table: TransitionTable::new(),
        }
    }

    /// Set the action for `(from, read)`, replacing any previous one.
    pub fn add_transition(
        &mut self,
        from: S,
        read: Symbol,
        to: S,
        write: Symbol,
        direction: Direction,
    ) {
        self.table.insert(
            from,
            read,
            Action {
                to,
                write,
                direction,
            },
        );
    }

    /// Remove the action for `(from, read)`. Returns whether one existed.
    pub fn remove_transition(&mut self, from: &S, read: Symbol) -> bool {
        self.table.remove(from, read).is_some()
    }

    /// Get the action for this key, if any.
    pub fn lookup(&self, from: &S, read: Symbol) -> Option<&Action<S>> {
        self.table.lookup(from, read)
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
    pub fn transitions(&self) -> &TransitionTable<S, Action<S>> {
        &self.table
    }

    /// Begin a run on a fresh tape holding `input`.
    pub fn start(&self, input: impl IntoIterator<Item = Symbol>) -> Execution<'_, S> {
        Execution {
            machine: self,
            state: self.initial.clone(),
            tape: Tape::new(input),
            steps: 0,
        }
    }

    /// Run until the machine halts. Never returns for tables that always
    /// have a transition; see [`TuringMachine::run_bounded`].
    pub fn run(&self, input: &str) -> Run<S> {
        self.start(input.chars().map(Symbol::from)).run()
    }

    /// Run until the machine halts or exceeds `limits`.
    pub fn run_bounded(&self, input: &str, limits: &RunLimits) -> Result<Run<S>, ExecutionError> {
        self.start(input.chars().map(Symbol::from))
            .run_bounded(limits)
    }

    /// Check whether the machine halts in a final state on `input`.
    pub fn validate_string(&self, input: &str) -> bool {
        self.run(input).accepted()
    }

    /// List states, symbols and transitions for debugging.
    pub fn describe(&self) -> Configuration {
        let mut states = vec![self.initial.name().to_string()];
        for state in &self.finals {
            Configuration::push_unique(&mut states, state.name().to_string());
        }

        let mut symbols = Vec::new();
        let mut transitions = Vec::new();
        for (from, read, action) in self.table.iter() {
            Configuration::push_unique(&mut states, from.name().to_string());
            Configuration::push_unique(&mut states, action.to.name().to_string());
            Configuration::push_unique(&mut symbols, read.to_string());
            Configuration::push_unique(&mut symbols, action.write.to_string());
            transitions.push(format!(
                "δ({}, {}) = ({}, {}, {})",
                from.name(),
                read,
                action.to.name(),
                action.write,
                action.direction
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

/// An in-progress run. Owns its tape; the machine is only borrowed.
#[derive(Debug)]
pub struct Execution<'m, S: State> {
    machine: &'m TuringMachine<S>,
    state: S,
    tape: Tape,
    steps: usize,
}

impl<'m, S: State> Execution<'m, S> {
    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Transitions applied so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Apply the transition for the current state and symbol, if any:
    /// write, change state, then move the head.
    pub fn step(&mut self) -> StepResult<S> {
        let machine = self.machine;
        let read = self.tape.read();
        let Some(action) = machine.table.lookup(&self.state, read) else {
            return StepResult::Halted(self.state.clone());
        };

        trace!(
            from = self.state.name(),
            read = %read,
            to = action.to.name(),
            write = %action.write,
            direction = %action.direction,
            head = self.tape.head(),
            "turing step"
        );

        self.tape.write(action.write);
        self.state = action.to.clone();
        self.tape.shift(action.direction);
        self.steps += 1;

        StepResult::Transitioned(self.state.clone())
    }

    /// Step until the machine halts.
    pub fn run(mut self) -> Run<S> {
        while let StepResult::Transitioned(_) = self.step() {}
        self.finish()
    }

    /// Step until the machine halts or a limit is exceeded.
    pub fn run_bounded(mut self, limits: &RunLimits) -> Result<Run<S>, ExecutionError> {
        while let StepResult::Transitioned(_) = self.step() {
            if let Err(err) = limits.check(self.steps, self.tape.len()) {
                warn!(
                    state = self.state.name(),
                    steps = self.steps,
                    cells = self.tape.len(),
                    error = %err,
                    "turing run exceeded its limits"
                );
                return Err(err);
            }
        }
        Ok(self.finish())
    }

    fn finish(self) -> Run<S> {
        let accepted = self.machine.is_final(&self.state);
        debug!(
            state = self.state.name(),
            steps = self.steps,
            accepted,
            "turing machine halted"
        );
        Run {
            state: self.state,
            accepted,
            steps: self.steps,
            tape: self.tape,
        }
    }
}

/// Outcome of a completed run: halting state, verdict and final tape.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<S: State> {
    state: S,
    accepted: bool,
    steps: usize,
    tape: Tape,
}

impl<S: State> Run<S> {
    /// Whether the machine halted in a final state.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// State the machine halted in.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of transitions applied before halting.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Take ownership of the final tape.
    pub fn into_tape(self) -> Tape {
        self.tape
    }

    /// Non-blank tape contents, reversed when `reverse` is set.
    pub fn read_tape(&self, reverse: bool) -> String {
        self.tape.contents(reverse)
    }
}
