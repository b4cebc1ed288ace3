//! Single-tape Turing machine engine.
//!
//! A [`TuringMachine`] is an immutable definition once built. Every run
//! gets its own [`Tape`] inside an [`Execution`], and hands it back in the
//! finished [`Run`], so concurrent runs over one machine never share
//! mutable state.

mod limits;
mod machine;
mod tape;

pub use limits::{ExecutionError, RunLimits};
pub use machine::{Execution, Run, StepResult, TuringMachine};
pub use tape::Tape;
