//! Error taxonomy shared by the tokenizer and the evaluator

use thiserror::Error;

/// Every way an expression can fail to evaluate.
///
/// The set is closed for the tokenizer and evaluator: each malformed input
/// resolves to exactly one of these kinds, and the first one detected is the
/// one returned. Front ends outside this crate must keep a default arm.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input was empty or held only whitespace
    #[error("empty input")]
    EmptyInput,
    /// Tokens were well formed but do not combine into a single value
    #[error("invalid expression")]
    InvalidExpression,
    /// Right operand of `/` was zero
    #[error("division by zero")]
    DivisionByZero,
    /// A `(` was never closed or a `)` was never opened
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// A numeric literal could not be read as a finite number
    #[error("invalid number")]
    InvalidNumber,
    /// A character that is not a digit, operator, parenthesis or whitespace
    #[default]
    #[error("unexpected token")]
    UnexpectedToken,
    /// An operator was applied with fewer than two operands available
    #[error("not enough values")]
    NotEnoughValues,
    /// An operator appeared where an operand was expected
    #[error("invalid operator")]
    InvalidOperator,
    /// The expression (or a parenthesized group) ends with an operator
    #[error("operator at end of expression")]
    OperatorAtEnd,
    /// A numeric literal holds more than one `.`
    #[error("multiple decimal points in number")]
    MultipleDecimalPoints,
}

/// Result of a tokenization or evaluation step.
pub type CalcResult<T> = Result<T, ErrorKind>;
