//! Pre-built automata.
//!
//! These are fixed transition tables built on the generic engines:
//! - [`unary_to_binary`]: Turing machine converting unary marks to binary
//! - [`expression_validator`]: NFA accepting simple arithmetic expressions

mod expression;
pub mod unary_to_binary;

pub use expression::expression_validator;
pub use unary_to_binary::{encode_text, unary_to_binary};
