//! Core automaton types shared by both engines.
//!
//! This module contains:
//! - State definitions via the `State` trait and the `StateId` identifier
//! - The closed `Symbol` type and head `Direction`
//! - The sparse `TransitionTable` and its entry merge policies
//! - A printable `Configuration` dump
//!
//! Nothing here performs I/O; tables are plain in-memory maps.

mod describe;
pub mod error;
mod state;
mod symbol;
mod table;

pub use describe::Configuration;
pub use error::SymbolError;
pub use state::{State, StateId};
pub use symbol::{Direction, Symbol};
pub use table::{Action, Destinations, TableEntry, TransitionTable};
