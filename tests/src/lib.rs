//! Shared fixtures for the workspace integration tests.

use calc_eval::ErrorKind;

/// Expressions with a known value
pub const VALID_CASES: &[(&str, f64)] = &[
    ("2 + 2", 4.0),
    ("2 + 2 * 2", 6.0),
    ("(2 + 2) * 2", 8.0),
    ("10 - 2 - 3", 5.0),
    ("2 + 2 * (3 - 1)", 6.0),
    ("7 / 2", 3.5),
    ("((1.5))", 1.5),
    ("1 - 5", -4.0),
];

/// Expressions with a known failure
pub const ERROR_CASES: &[(&str, ErrorKind)] = &[
    ("", ErrorKind::EmptyInput),
    ("   ", ErrorKind::EmptyInput),
    ("2 / 0", ErrorKind::DivisionByZero),
    ("(2 + 3", ErrorKind::MismatchedParentheses),
    ("2 + 3)", ErrorKind::MismatchedParentheses),
    ("2..5 + 1", ErrorKind::MultipleDecimalPoints),
    ("2 + ", ErrorKind::OperatorAtEnd),
    ("+ 2", ErrorKind::InvalidOperator),
    ("2 $ 3", ErrorKind::UnexpectedToken),
    ("2*(2+2{)", ErrorKind::UnexpectedToken),
    ("()", ErrorKind::InvalidExpression),
    ("1 + .", ErrorKind::InvalidNumber),
];
