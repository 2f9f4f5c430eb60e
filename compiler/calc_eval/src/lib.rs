//! Arithmetic expression evaluation.
//!
//! [`calc`] runs the whole pipeline: the input is tokenized by `calc_lexer`
//! and the tokens are folded into one number by a shunting-yard scan. Every
//! call is independent; the only shared data is the constant operator table.

#![warn(missing_docs)]

pub mod evaluator;
pub mod precedence;
pub mod token_stream;

pub use calc_lexer::{tokenize, CalcResult, ErrorKind, Operator, Token, TokenType};
pub use evaluator::{apply_operator, evaluate};
pub use precedence::{operator_info, Associativity, OperatorInfo};

/// Evaluate an expression string.
pub fn calc(expression: &str) -> CalcResult<f64> {
    let tokens = tokenize(expression)?;
    log::debug!("tokenized {:?} into {} tokens", expression, tokens.len());
    evaluate(&tokens)
}
