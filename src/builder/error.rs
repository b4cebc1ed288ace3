//! Build errors for automaton builders.

use crate::core::SymbolError;
use thiserror::Error;

/// Errors that can occur when building an NFA or a Turing machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Invalid definition: {0}")]
    InvalidDefinition(#[from] SymbolError),
}
