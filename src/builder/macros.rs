//! Macros for declaring automaton state types.

/// Generate a `State` implementation for a fieldless enum.
///
/// The enum derives everything the `State` trait requires; each variant's
/// name is its identifier.
///
/// # Example
///
/// ```
/// use automata::builder::NfaBuilder;
/// use automata::state_enum;
///
/// state_enum! {
///     pub enum Parity {
///         Even,
///         Odd,
///     }
/// }
///
/// let nfa = NfaBuilder::new()
///     .initial(Parity::Even)
///     .final_state(Parity::Even)
///     .transition(Parity::Even, '1', Parity::Odd)
///     .transition(Parity::Odd, '1', Parity::Even)
///     .build()
///     .unwrap();
///
/// assert!(nfa.validate_string("11"));
/// assert!(!nfa.validate_string("111"));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Direction, State, Symbol};
    use crate::turing::TuringMachine;

    state_enum! {
        enum TestState {
            Scan,
            Done,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Scan.name(), "Scan");
        assert_eq!(TestState::Done.name(), "Done");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn state_enum_drives_turing_machine() {
        let mut machine = TuringMachine::new(TestState::Scan, [TestState::Done]);
        machine.add_transition(
            TestState::Scan,
            Symbol::from('a'),
            TestState::Scan,
            Symbol::from('a'),
            Direction::Right,
        );
        machine.add_transition(
            TestState::Scan,
            Symbol::BLANK,
            TestState::Done,
            Symbol::BLANK,
            Direction::Right,
        );

        assert!(machine.validate_string("aaa"));
        assert!(!machine.validate_string("ab"));
        assert_eq!(machine.describe().states, vec!["Scan", "Done"]);
    }
}
