//! Sparse transition tables keyed by (state, symbol).
//!
//! Both engines store their transitions in a [`TransitionTable`]. What
//! happens when a key is inserted twice is decided by the entry type:
//! NFA [`Destinations`] append, Turing machine [`Action`]s overwrite.

use crate::core::state::State;
use crate::core::symbol::{Direction, Symbol};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Merge policy for values stored in a [`TransitionTable`].
pub trait TableEntry<S: State>: Sized {
    /// The value passed to [`TransitionTable::insert`].
    type Item;

    /// Build the entry for a key seen for the first time.
    fn create(item: Self::Item) -> Self;

    /// Fold another insertion for the same key into this entry.
    fn merge(&mut self, item: Self::Item);
}

/// Destination states of a nondeterministic transition, in insertion order.
///
/// Inserting the same destination twice stores it twice; acceptance only
/// depends on whether a destination exists.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Destinations<S: State>(Vec<S>);

impl<S: State> Destinations<S> {
    /// Iterate over destinations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.0.iter()
    }

    /// Number of stored destinations, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no destination is stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if `state` is one of the destinations.
    pub fn contains(&self, state: &S) -> bool {
        self.0.contains(state)
    }
}

impl<S: State> TableEntry<S> for Destinations<S> {
    type Item = S;

    fn create(item: S) -> Self {
        Self(vec![item])
    }

    fn merge(&mut self, item: S) {
        self.0.push(item);
    }
}

impl<'a, S: State> IntoIterator for &'a Destinations<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Deterministic Turing machine action: next state, symbol to write, head move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Action<S: State> {
    pub to: S,
    pub write: Symbol,
    pub direction: Direction,
}

impl<S: State> TableEntry<S> for Action<S> {
    type Item = Action<S>;

    fn create(item: Action<S>) -> Self {
        item
    }

    // Last write wins.
    fn merge(&mut self, item: Action<S>) {
        *self = item;
    }
}

/// Mapping from (state, symbol) to a table entry.
///
/// Source states and their symbols keep insertion order, which fixes the
/// order of NFA branch exploration and of configuration dumps.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: TableEntry<S>> {
    entries: IndexMap<S, IndexMap<Symbol, E>>,
}

impl<S: State, E: TableEntry<S>> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry, merging with any existing entry for the same key.
    pub fn insert(&mut self, from: S, symbol: Symbol, item: E::Item) {
        let row = self.entries.entry(from).or_default();
        match row.get_mut(&symbol) {
            Some(existing) => existing.merge(item),
            None => {
                row.insert(symbol, E::create(item));
            }
        }
    }

    /// Delete the entry for this key. Absent keys are ignored.
    pub fn remove(&mut self, from: &S, symbol: Symbol) -> Option<E> {
        let row = self.entries.get_mut(from)?;
        let removed = row.shift_remove(&symbol);
        if row.is_empty() {
            self.entries.shift_remove(from);
        }
        removed
    }

    /// Get the entry for this key, if one was inserted.
    pub fn lookup(&self, from: &S, symbol: Symbol) -> Option<&E> {
        self.entries.get(from)?.get(&symbol)
    }

    /// Number of (state, symbol) keys with an entry.
    pub fn len(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(from, symbol, entry)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, Symbol, &E)> + '_ {
        self.entries
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(symbol, entry)| (from, *symbol, entry)))
    }

    /// Source states that have at least one entry.
    pub fn sources(&self) -> impl Iterator<Item = &S> + '_ {
        self.entries.keys()
    }
}

impl<S: State, E: TableEntry<S>> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
