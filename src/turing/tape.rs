//! Lazily extended Turing machine tape.

use crate::core::{Direction, Symbol};

/// Unbounded tape addressed by signed offset from the first input cell.
///
/// Cells at offsets `0, 1, 2, ...` live in `right`, cells at `-1, -2, ...`
/// live in `left`. Only cells the head has visited or the input filled are
/// stored; moving past either end appends a blank cell.
///
/// Invariant: the cell under the head is always materialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tape {
    right: Vec<Symbol>,
    left: Vec<Symbol>,
    head: isize,
}

impl Tape {
    /// Write `input` left to right from offset 0 and park the head on
    /// the first cell. An empty input leaves a single blank cell.
    pub fn new(input: impl IntoIterator<Item = Symbol>) -> Self {
        let mut right: Vec<Symbol> = input.into_iter().collect();
        if right.is_empty() {
            right.push(Symbol::BLANK);
        }
        Self {
            right,
            left: Vec::new(),
            head: 0,
        }
    }

    /// Offset of the head from the first input cell.
    pub fn head(&self) -> isize {
        self.head
    }

    pub fn read(&self) -> Symbol {
        if self.head >= 0 {
            self.right[self.head as usize]
        } else {
            self.left[(-self.head - 1) as usize]
        }
    }

    pub fn write(&mut self, symbol: Symbol) {
        if self.head >= 0 {
            self.right[self.head as usize] = symbol;
        } else {
            self.left[(-self.head - 1) as usize] = symbol;
        }
    }

    /// Move the head one cell, creating a blank cell if none exists there.
    pub fn shift(&mut self, direction: Direction) {
        self.head += match direction {
            Direction::Left => -1,
            Direction::Right => 1,
        };

        if self.head >= 0 {
            if self.head as usize == self.right.len() {
                self.right.push(Symbol::BLANK);
            }
        } else if (-self.head - 1) as usize == self.left.len() {
            self.left.push(Symbol::BLANK);
        }
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Always false: a tape holds at least the cell under the head.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialized cells from the leftmost to the rightmost.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = Symbol> + '_ {
        self.left.iter().rev().chain(self.right.iter()).copied()
    }

    /// Concatenate every non-blank cell, left to right, or right to left
    /// when `reverse` is set.
    pub fn contents(&self, reverse: bool) -> String {
        let chars = self.cells().filter_map(|symbol| symbol.as_char());
        if reverse {
            chars.rev().collect()
        } else {
            chars.collect()
        }
    }
}
