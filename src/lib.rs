//! Automata: NFA and Turing machine interpreters
//!
//! Two engines share one idea, a sparse transition table keyed by
//! (state, symbol), but run it differently:
//!
//! - **NFA**: depth-first search over every nondeterministic choice,
//!   following epsilon transitions before consuming input.
//! - **Turing machine**: deterministic step loop over an unbounded tape,
//!   halting when no transition applies.
//!
//! # Core Concepts
//!
//! - **State**: Opaque identifiers via the `State` trait (`StateId` by default)
//! - **Symbol**: A character or the empty symbol (epsilon / blank)
//! - **Definitions** are built once and then only read; every Turing
//!   machine run owns its own tape
//!
//! # Example
//!
//! ```rust
//! use automata::prebuilt::{expression_validator, unary_to_binary};
//!
//! let nfa = expression_validator();
//! assert!(nfa.validate_string("1.23e3+20"));
//! assert!(!nfa.validate_string("1..2"));
//!
//! let machine = unary_to_binary();
//! let run = machine.run("1111111");
//! assert!(run.accepted());
//! assert_eq!(run.read_tape(true), "111");
//! ```

pub mod builder;
pub mod core;
pub mod nfa;
pub mod prebuilt;
pub mod snapshot;
pub mod turing;

// Re-export commonly used types
pub use builder::{BuildError, NfaBuilder, TuringMachineBuilder};
pub use core::{Direction, State, StateId, Symbol};
pub use nfa::Nfa;
pub use turing::{Run, RunLimits, TuringMachine};
