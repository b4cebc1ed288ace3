//! Tape and input symbols.

use crate::core::error::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A single input or tape symbol.
///
/// `Empty` plays two roles depending on the engine: it is the epsilon
/// (no-input) label in an NFA and the blank cell on a Turing machine tape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    Char(char),
    Empty,
}

impl Symbol {
    /// Blank tape cell.
    pub const BLANK: Symbol = Symbol::Empty;

    /// Epsilon transition label.
    pub const EPSILON: Symbol = Symbol::Empty;

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Empty => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::Empty),
            (Some(c), None) => Ok(Self::Char(c)),
            _ => Err(SymbolError::MultiCharSymbol(s.to_string())),
        }
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Empty => f.write_str("_"),
        }
    }
}

/// Head movement after a Turing machine transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl TryFrom<&str> for Direction {
    type Error = SymbolError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(SymbolError::UnknownDirection(s.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("L"),
            Self::Right => f.write_str("R"),
        }
    }
}
