//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and macros for creating NFAs and
//! Turing machines with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod macros;
pub mod nfa;
pub mod turing;

pub use error::BuildError;
pub use nfa::NfaBuilder;
pub use turing::TuringMachineBuilder;
