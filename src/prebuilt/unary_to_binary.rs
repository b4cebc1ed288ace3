//! Turing machine converting unary numerals to binary.
//!
//! The input is a run of `1` marks. The machine erases marks one at a
//! time from the left and increments a binary counter written after an
//! `=` separator, least significant digit first. Once every mark is gone
//! it erases the separator and halts in state 5, so the non-blank tape
//! read in reverse is the binary numeral.

use crate::core::{Direction, StateId, Symbol};
use crate::turing::{RunLimits, TuringMachine};

const NOT_ACCEPTED: &str = "not_accepted";

/// Step budget for converting one character in [`encode_text`].
pub const ENCODE_STEP_LIMIT: usize = 1_000_000;

/// Build the unary to binary converter (initial state 0, final state 5).
pub fn unary_to_binary() -> TuringMachine<StateId> {
    use Direction::{Left as L, Right as R};

    fn q(n: u32) -> StateId {
        StateId::from(n)
    }
    fn s(c: char) -> Symbol {
        Symbol::from(c)
    }
    let blank = Symbol::BLANK;

    let mut machine = TuringMachine::new(q(0), [q(5)]);

    // erase the leftmost mark and walk to the separator
    machine.add_transition(q(0), s('1'), q(1), blank, R);
    machine.add_transition(q(1), s('1'), q(1), s('1'), R);
    machine.add_transition(q(1), s('='), q(2), s('='), R);
    machine.add_transition(q(1), blank, q(2), s('='), R);

    // increment the counter
    machine.add_transition(q(2), s('1'), q(2), s('1'), R);
    machine.add_transition(q(2), blank, q(3), s('1'), L);
    machine.add_transition(q(2), s('0'), q(3), s('1'), L);
    machine.add_transition(q(3), s('1'), q(3), s('0'), L);

    // walk back to the remaining marks
    machine.add_transition(q(3), s('='), q(4), s('='), L);
    machine.add_transition(q(4), s('1'), q(4), s('1'), L);
    machine.add_transition(q(4), blank, q(0), blank, R);

    // no marks left
    machine.add_transition(q(0), s('='), q(5), blank, R);

    machine
}

/// Convert `n` to binary by running the machine on `n` unary marks.
/// Returns `None` when the machine rejects, which happens for `n == 0`.
pub fn convert(machine: &TuringMachine<StateId>, n: u32) -> Option<String> {
    let unary = "1".repeat(n as usize);
    let run = machine.run(&unary);
    run.accepted().then(|| run.read_tape(true))
}

/// Encode every character of `text` as the binary form of its code point,
/// separated by single spaces. Characters the machine rejects are written
/// as `not_accepted`.
///
/// The machine takes roughly `n²` steps for `n` marks, so each character
/// runs under a cap of [`ENCODE_STEP_LIMIT`] steps. That covers code points
/// up to about U+03E0; characters beyond the cap are also `not_accepted`.
pub fn encode_text(text: &str) -> String {
    let machine = unary_to_binary();
    let limits = RunLimits::unbounded().max_steps(ENCODE_STEP_LIMIT);
    text.chars()
        .map(|c| {
            let unary = "1".repeat(u32::from(c) as usize);
            match machine.run_bounded(&unary, &limits) {
                Ok(run) if run.accepted() => run.read_tape(true),
                _ => NOT_ACCEPTED.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_marks_convert_to_111() {
        let machine = unary_to_binary();
        let run = machine.run("1111111");

        assert!(run.accepted());
        assert_eq!(run.read_tape(true), "111");
    }

    #[test]
    fn converts_small_numbers() {
        let machine = unary_to_binary();
        assert_eq!(convert(&machine, 1).as_deref(), Some("1"));
        assert_eq!(convert(&machine, 2).as_deref(), Some("10"));
        assert_eq!(convert(&machine, 4).as_deref(), Some("100"));
        assert_eq!(convert(&machine, 5).as_deref(), Some("101"));
        assert_eq!(convert(&machine, 12).as_deref(), Some("1100"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let machine = unary_to_binary();
        assert!(!machine.validate_string(""));
        assert_eq!(convert(&machine, 0), None);
    }

    #[test]
    fn non_unary_input_is_rejected() {
        let machine = unary_to_binary();
        assert!(!machine.validate_string("1101"));
        assert!(!machine.validate_string("abc"));
    }

    #[test]
    fn counter_is_written_least_significant_first() {
        let run = unary_to_binary().run("111111");
        assert_eq!(run.read_tape(false), "011");
        assert_eq!(run.read_tape(true), "110");
    }

    #[test]
    fn machine_has_six_states_and_twelve_transitions() {
        let machine = unary_to_binary();
        let config = machine.describe();
        assert_eq!(config.states.len(), 6);
        assert_eq!(config.transitions.len(), 12);
        assert_eq!(config.finals, vec!["5"]);
    }

    #[test]
    fn encode_text_converts_each_character() {
        assert_eq!(encode_text("Hi"), "1001000 1101001");
        assert_eq!(encode_text("A"), "1000001");
        assert_eq!(encode_text(""), "");
    }

    #[test]
    fn encode_text_marks_rejected_characters() {
        assert_eq!(encode_text("\0a"), "not_accepted 1100001");
    }

    #[test]
    fn encode_text_handles_accented_latin() {
        assert_eq!(encode_text("é"), "11101001");
    }

    #[test]
    fn encode_text_gives_up_on_code_points_past_the_step_limit() {
        assert_eq!(encode_text("😀a"), "not_accepted 1100001");
    }
}
