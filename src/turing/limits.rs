//! Caller-imposed bounds for Turing machine runs.
//!
//! The engine itself never stops a machine that keeps finding transitions.
//! Callers that feed untrusted tables bound the run with [`RunLimits`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a bounded run exceeds its limits.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionError {
    #[error("Step limit ({max}) exceeded before the machine halted")]
    StepLimitExceeded { max: usize },

    #[error("Tape limit ({max} cells) exceeded (current: {cells})")]
    TapeLimitExceeded { max: usize, cells: usize },
}

/// Upper bounds on the number of steps and materialized tape cells.
///
/// # Example
///
/// ```rust
/// use automata::turing::RunLimits;
///
/// let limits = RunLimits::unbounded().max_steps(10_000).max_tape_cells(512);
/// assert!(limits.check(10_000, 512).is_ok());
/// assert!(limits.check(10_001, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLimits {
    max_steps: Option<usize>,
    max_tape_cells: Option<usize>,
}

impl RunLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Allow at most `n` transitions.
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Allow at most `n` materialized tape cells.
    pub fn max_tape_cells(mut self, n: usize) -> Self {
        self.max_tape_cells = Some(n);
        self
    }

    /// Check a run that has taken `steps` transitions over `cells` cells.
    pub fn check(&self, steps: usize, cells: usize) -> Result<(), ExecutionError> {
        if let Some(max) = self.max_steps {
            if steps > max {
                return Err(ExecutionError::StepLimitExceeded { max });
            }
        }
        if let Some(max) = self.max_tape_cells {
            if cells > max {
                return Err(ExecutionError::TapeLimitExceeded { max, cells });
            }
        }
        Ok(())
    }
}
