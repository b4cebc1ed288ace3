//! NFA validating simple arithmetic expressions.
//!
//! Operands are signed integers, decimals and scientific notation
//! (`12`, `-3.5`, `1.2e-4`), joined by `+ - * /`. States:
//!
//! | state | meaning |
//! |---|---|
//! | 0 | expecting an operand |
//! | 1 | integer part |
//! | 2 | fractional part |
//! | 3 | after `e` |
//! | 4 | exponent digits |
//! | 5 | accept (reached by epsilon from 1, 2, 4) |

use crate::core::{StateId, Symbol};
use crate::nfa::Nfa;

const DIGITS: &str = "0123456789";
const OPERATORS: &str = "+-*/";

/// Build the expression validator (initial state 0, final state 5).
pub fn expression_validator() -> Nfa<StateId> {
    fn q(n: u32) -> StateId {
        StateId::from(n)
    }

    let mut nfa = Nfa::new(q(0), [q(5)]);
    let mut on_each = |from: u32, chars: &str, to: u32| {
        for c in chars.chars() {
            nfa.add_transition(q(from), Symbol::from(c), q(to));
        }
    };

    // operand sign and digits
    on_each(0, "-+", 1);
    on_each(0, DIGITS, 1);
    on_each(1, DIGITS, 1);
    on_each(2, DIGITS, 2);
    on_each(3, DIGITS, 3);

    on_each(1, ".", 2);

    // exponent
    on_each(1, "e", 3);
    on_each(2, "e", 3);
    on_each(3, "-+", 4);
    on_each(3, DIGITS, 4);
    on_each(4, DIGITS, 4);

    // next operand
    on_each(1, OPERATORS, 0);
    on_each(2, OPERATORS, 0);
    on_each(4, OPERATORS, 0);

    for from in [1, 2, 4] {
        nfa.add_transition(q(from), Symbol::EPSILON, q(5));
    }

    nfa
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scientific_expression() {
        assert!(expression_validator().validate_string("1.23e3+20"));
    }

    #[test]
    fn rejects_double_decimal_point() {
        assert!(!expression_validator().validate_string("1..2"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(!expression_validator().validate_string(""));
    }

    #[test]
    fn accepts_operands_and_operators() {
        let nfa = expression_validator();
        for input in ["42", "-7", "3*4", "10/2-1", "0.5", "2.e5", "6e-2*3", "1e+9"] {
            assert!(nfa.validate_string(input), "expected {input:?} to be accepted");
        }
    }

    #[test]
    fn rejects_malformed_expressions() {
        let nfa = expression_validator();
        for input in ["1e", "1+", "*2", "1.2.3", "abc", "1 + 2", "e5"] {
            assert!(!nfa.validate_string(input), "expected {input:?} to be rejected");
        }
    }

    #[test]
    fn accepts_very_long_operands() {
        let nfa = expression_validator();
        let operand = "1".repeat(200_000);
        assert!(nfa.validate_string(&operand));
        assert!(nfa.validate_string(&format!("{operand}.5e3-{operand}")));
        assert!(!nfa.validate_string(&format!("{operand}+")));
    }

    #[test]
    fn nondeterministic_exponent_digits_are_explored() {
        // From state 3 a digit goes to both 3 and 4; only 4 can accept.
        let nfa = expression_validator();
        assert!(nfa.validate_string("1e12"));
        assert_eq!(
            nfa.lookup(&StateId::from(3u32), Symbol::from('7')).map(|d| d.len()),
            Some(2)
        );
    }
}
