//! Core State trait for automaton states.
//!
//! States are opaque identifiers. The engines only ever compare them for
//! equality and hash them into transition tables; no ordering is assumed.

use crate::core::error::SymbolError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition tables and run results
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use automata::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Named state identifier used by the pre-built configurations.
///
/// Names are validated on construction: an empty or whitespace-only name
/// is rejected instead of being silently accepted as a state.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateId(String);

impl StateId {
    /// Create a state from a non-blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, SymbolError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SymbolError::EmptyStateName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl State for StateId {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<u32> for StateId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl TryFrom<String> for StateId {
    type Error = SymbolError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<StateId> for String {
    fn from(state: StateId) -> Self {
        state.0
    }
}

impl FromStr for StateId {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Accept,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Accept => "Accept",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Start.name(), "Start");
        assert_eq!(TestState::Accept.name(), "Accept");
    }

    #[test]
    fn numeric_state_ids_use_decimal_names() {
        assert_eq!(StateId::from(5u32).name(), "5");
        assert_eq!(StateId::from(0u32), "0".parse().unwrap());
    }

    #[test]
    fn blank_state_names_are_rejected() {
        assert!(matches!(StateId::new(""), Err(SymbolError::EmptyStateName)));
        assert!(matches!(StateId::new("  "), Err(SymbolError::EmptyStateName)));
        assert!(StateId::new("q0").is_ok());
    }

    #[test]
    fn state_id_serializes_as_plain_string() {
        let state = StateId::new("q1").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"q1\"");

        let deserialized: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn deserializing_blank_state_fails() {
        let result: Result<StateId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
