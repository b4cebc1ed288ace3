//! Property-based tests for the NFA and Turing machine engines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use automata::core::{Direction, StateId, Symbol};
use automata::nfa::Nfa;
use automata::prebuilt::{expression_validator, unary_to_binary};
use automata::turing::{RunLimits, TuringMachine};
use proptest::prelude::*;

fn q(n: u32) -> StateId {
    StateId::from(n)
}

prop_compose! {
    fn arbitrary_symbol()(c in prop::sample::select(vec!['a', 'b', 'c'])) -> Symbol {
        Symbol::from(c)
    }
}

prop_compose! {
    fn arbitrary_label()(epsilon in prop::bool::weighted(0.2), symbol in arbitrary_symbol()) -> Symbol {
        if epsilon { Symbol::EPSILON } else { symbol }
    }
}

prop_compose! {
    fn arbitrary_nfa_transition()(from in 0..4u32, label in arbitrary_label(), to in 0..4u32)
        -> (u32, Symbol, u32)
    {
        (from, label, to)
    }
}

prop_compose! {
    fn arbitrary_nfa()(
        finals in prop::collection::vec(0..4u32, 0..3),
        transitions in prop::collection::vec(arbitrary_nfa_transition(), 0..12),
    ) -> Nfa<StateId> {
        let mut nfa = Nfa::new(q(0), finals.into_iter().map(q));
        for (from, label, to) in transitions {
            nfa.add_transition(q(from), label, q(to));
        }
        nfa
    }
}

prop_compose! {
    fn arbitrary_action()(
        to in 0..3u32,
        write in prop::sample::select(vec![Symbol::from('a'), Symbol::from('b'), Symbol::BLANK]),
        right in any::<bool>(),
    ) -> (u32, Symbol, Direction) {
        (to, write, if right { Direction::Right } else { Direction::Left })
    }
}

prop_compose! {
    fn arbitrary_machine()(
        transitions in prop::collection::vec(
            (0..3u32, prop::sample::select(vec![Symbol::from('a'), Symbol::from('b'), Symbol::BLANK]), arbitrary_action()),
            0..8,
        ),
    ) -> TuringMachine<StateId> {
        let mut machine = TuringMachine::new(q(0), [q(2)]);
        for (from, read, (to, write, direction)) in transitions {
            machine.add_transition(q(from), read, q(to), write, direction);
        }
        machine
    }
}

fn input_string() -> impl Strategy<Value = String> {
    "[abc]{0,6}"
}

proptest! {
    #[test]
    fn empty_nfa_accepts_only_empty_input_when_initial_is_final(
        initial_is_final in any::<bool>(),
        input in "[abc]{1,6}",
    ) {
        let finals = if initial_is_final { vec![q(0)] } else { vec![q(1)] };
        let nfa = Nfa::new(q(0), finals);

        prop_assert_eq!(nfa.validate_string(""), initial_is_final);
        prop_assert!(!nfa.validate_string(&input));
    }

    #[test]
    fn epsilon_into_final_state_accepts_empty_input(nfa in arbitrary_nfa(), target in 0..4u32) {
        let mut with_epsilon = Nfa::new(q(0), [q(target)]);
        for (from, symbol, destinations) in nfa.transitions().iter() {
            for to in destinations {
                with_epsilon.add_transition(from.clone(), symbol, to.clone());
            }
        }
        with_epsilon.add_transition(q(0), Symbol::EPSILON, q(target));

        prop_assert!(with_epsilon.validate_string(""));
    }

    #[test]
    fn nfa_validation_terminates_and_is_deterministic(nfa in arbitrary_nfa(), input in input_string()) {
        let first = nfa.validate_string(&input);
        let second = nfa.validate_string(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn duplicate_nfa_transitions_do_not_change_outcome(
        nfa in arbitrary_nfa(),
        input in input_string(),
    ) {
        let before = nfa.validate_string(&input);

        let mut doubled = nfa.clone();
        let existing: Vec<_> = nfa
            .transitions()
            .iter()
            .flat_map(|(from, symbol, destinations)| {
                destinations.iter().map(move |to| (from.clone(), symbol, to.clone()))
            })
            .collect();
        for (from, symbol, to) in existing {
            doubled.add_transition(from, symbol, to);
        }

        prop_assert_eq!(doubled.validate_string(&input), before);
    }

    #[test]
    fn turing_runs_are_deterministic(machine in arbitrary_machine(), input in "[ab]{0,6}") {
        let limits = RunLimits::unbounded().max_steps(200);
        let first = machine.run_bounded(&input, &limits);
        let second = machine.run_bounded(&input, &limits);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn identical_turing_insertion_is_a_no_op(machine in arbitrary_machine(), input in "[ab]{0,6}") {
        let limits = RunLimits::unbounded().max_steps(200);
        let before = machine.run_bounded(&input, &limits);

        let mut again = machine.clone();
        let existing: Vec<_> = machine
            .transitions()
            .iter()
            .map(|(from, read, action)| (from.clone(), read, action.clone()))
            .collect();
        for (from, read, action) in existing {
            again.add_transition(from, read, action.to, action.write, action.direction);
        }

        prop_assert_eq!(again.run_bounded(&input, &limits), before);
    }

    #[test]
    fn unary_to_binary_matches_native_formatting(n in 1u32..200) {
        let run = unary_to_binary().run(&"1".repeat(n as usize));
        prop_assert!(run.accepted());
        prop_assert_eq!(run.read_tape(true), format!("{n:b}"));
    }

    #[test]
    fn expression_validator_accepts_integer_sums(a in 0u32..10_000, b in 0u32..10_000) {
        let nfa = expression_validator();
        let sum = format!("{a}+{b}");
        let double_operator = format!("{a}**{b}");
        prop_assert!(nfa.validate_string(&sum));
        prop_assert!(!nfa.validate_string(&double_operator));
    }
}
