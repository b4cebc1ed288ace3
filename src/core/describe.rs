//! Human-readable configuration dump for debugging.

use serde::Serialize;
use std::fmt::{self, Display};

/// Snapshot of an automaton's states, symbols and transitions, rendered
/// as text by its `Display` implementation.
///
/// Every field is already formatted; this type carries no engine semantics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Configuration {
    pub states: Vec<String>,
    pub symbols: Vec<String>,
    pub initial: String,
    pub finals: Vec<String>,
    pub transitions: Vec<String>,
}

impl Configuration {
    pub(crate) fn push_unique(list: &mut Vec<String>, item: String) {
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "M = ({{{}}}, {{{}}}, {}, {{{}}})",
            self.states.join(", "),
            self.symbols.join(", "),
            self.initial,
            self.finals.join(", ")
        )?;
        for transition in &self.transitions {
            writeln!(f, "    {transition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_header_then_transitions() {
        let config = Configuration {
            states: vec!["0".into(), "1".into()],
            symbols: vec!["a".into()],
            initial: "0".into(),
            finals: vec!["1".into()],
            transitions: vec!["δ(0, a) = {1}".into()],
        };

        assert_eq!(
            config.to_string(),
            "M = ({0, 1}, {a}, 0, {1})\n    δ(0, a) = {1}\n"
        );
    }

    #[test]
    fn push_unique_skips_duplicates() {
        let mut list = vec!["a".to_string()];
        Configuration::push_unique(&mut list, "a".into());
        Configuration::push_unique(&mut list, "b".into());
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }
}
