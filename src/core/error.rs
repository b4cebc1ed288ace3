//! Errors for malformed states, symbols and directions.

use thiserror::Error;

/// Errors raised when parsing the loosely typed pieces of a definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SymbolError {
    #[error("State name must not be empty")]
    EmptyStateName,

    #[error("Symbol '{0}' is longer than one character")]
    MultiCharSymbol(String),

    #[error("Unknown head direction '{0}', expected L or R")]
    UnknownDirection(String),
}
