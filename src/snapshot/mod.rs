//! Save and restore automaton definitions.
//!
//! Engines are converted to plain serializable definitions, which are
//! wrapped in a versioned [`Snapshot`] and written as JSON or as a compact
//! binary blob. Run state (tapes, search stacks) is never part of a
//! snapshot.

use crate::core::{Direction, State, Symbol};
use crate::nfa::Nfa;
use crate::turing::TuringMachine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One NFA transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NfaTransition<S: State> {
    pub from: S,
    pub symbol: Symbol,
    pub to: S,
}

/// Serializable form of an [`Nfa`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NfaDefinition<S: State> {
    pub initial: S,
    pub finals: Vec<S>,
    pub transitions: Vec<NfaTransition<S>>,
}

/// One Turing machine transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TuringTransition<S: State> {
    pub from: S,
    pub read: Symbol,
    pub to: S,
    pub write: Symbol,
    pub direction: Direction,
}

/// Serializable form of a [`TuringMachine`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TuringDefinition<S: State> {
    pub initial: S,
    pub finals: Vec<S>,
    pub transitions: Vec<TuringTransition<S>>,
}

impl<S: State> Nfa<S> {
    /// Export the automaton. Duplicate destinations are preserved.
    pub fn to_definition(&self) -> NfaDefinition<S> {
        let transitions = self
            .transitions()
            .iter()
            .flat_map(|(from, symbol, destinations)| {
                destinations.iter().map(move |to| NfaTransition {
                    from: from.clone(),
                    symbol,
                    to: to.clone(),
                })
            })
            .collect();

        NfaDefinition {
            initial: self.initial_state().clone(),
            finals: self.final_states().cloned().collect(),
            transitions,
        }
    }

    pub fn from_definition(definition: NfaDefinition<S>) -> Self {
        let mut nfa = Nfa::new(definition.initial, definition.finals);
        for t in definition.transitions {
            nfa.add_transition(t.from, t.symbol, t.to);
        }
        nfa
    }
}

impl<S: State> TuringMachine<S> {
    pub fn to_definition(&self) -> TuringDefinition<S> {
        let transitions = self
            .transitions()
            .iter()
            .map(|(from, read, action)| TuringTransition {
                from: from.clone(),
                read,
                to: action.to.clone(),
                write: action.write,
                direction: action.direction,
            })
            .collect();

        TuringDefinition {
            initial: self.initial_state().clone(),
            finals: self.final_states().cloned().collect(),
            transitions,
        }
    }

    pub fn from_definition(definition: TuringDefinition<S>) -> Self {
        let mut machine = TuringMachine::new(definition.initial, definition.finals);
        for t in definition.transitions {
            machine.add_transition(t.from, t.read, t.to, t.write, t.direction);
        }
        machine
    }
}

/// Versioned wrapper around a definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<D> {
    /// Snapshot format version
    pub version: u32,

    pub definition: D,
}

impl<D: Serialize + DeserializeOwned> Snapshot<D> {
    pub fn new(definition: D) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            definition,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
