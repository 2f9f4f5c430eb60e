use calc_eval::{calc, ErrorKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn documented_results() {
    let cases = [
        ("2 + 2", 4.0),
        ("2 + 2 * 2", 6.0),
        ("(2 + 2) * 2", 8.0),
        ("10 - 2 - 3", 5.0),
        ("2 + 2 * (3 - 1)", 6.0),
        ("100 / (4 * (2 + 3))", 5.0),
        ("0.1 + 0.2", 0.1 + 0.2),
    ];
    for (input, expected) in cases {
        assert_eq!(calc(input), Ok(expected), "input: {input}");
    }
}

#[test]
fn documented_errors() {
    let cases = [
        ("", ErrorKind::EmptyInput),
        ("   ", ErrorKind::EmptyInput),
        ("2 / 0", ErrorKind::DivisionByZero),
        ("(2 + 3", ErrorKind::MismatchedParentheses),
        ("2 + 3)", ErrorKind::MismatchedParentheses),
        ("2..5 + 1", ErrorKind::MultipleDecimalPoints),
        ("2 + ", ErrorKind::OperatorAtEnd),
        ("+ 2", ErrorKind::InvalidOperator),
        ("2 $ 3", ErrorKind::UnexpectedToken),
        ("()", ErrorKind::InvalidExpression),
        ("2*(2+2{)", ErrorKind::UnexpectedToken),
        (".", ErrorKind::InvalidNumber),
    ];
    for (input, expected) in cases {
        assert_eq!(calc(input), Err(expected), "input: {input:?}");
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul), Just(Op::Div)]
}

/// Reference evaluation of a flat expression: fold `* /` runs into terms,
/// then combine terms left to right.
fn reference(first: u32, rest: &[(Op, u32)]) -> f64 {
    let mut terms: Vec<(Op, f64)> = vec![(Op::Add, f64::from(first))];
    for &(op, n) in rest {
        let n = f64::from(n);
        match op {
            Op::Mul => terms.last_mut().unwrap().1 *= n,
            Op::Div => terms.last_mut().unwrap().1 /= n,
            Op::Add | Op::Sub => terms.push((op, n)),
        }
    }
    let mut iter = terms.into_iter();
    let mut total = iter.next().unwrap().1;
    for (op, term) in iter {
        match op {
            Op::Sub => total -= term,
            _ => total += term,
        }
    }
    total
}

proptest! {
    #[test]
    fn flat_expressions_follow_precedence(
        first in 1u32..1000,
        rest in proptest::collection::vec((op_strategy(), 1u32..1000), 0..12),
    ) {
        let mut text = first.to_string();
        for (op, n) in &rest {
            text.push_str(&format!(" {} {}", op.symbol(), n));
        }
        prop_assert_eq!(calc(&text), Ok(reference(first, &rest)));
    }

    #[test]
    fn wrapping_in_parentheses_is_transparent(
        first in 1u32..1000,
        rest in proptest::collection::vec((op_strategy(), 1u32..1000), 0..8),
    ) {
        let mut text = first.to_string();
        for (op, n) in &rest {
            text.push_str(&format!(" {} {}", op.symbol(), n));
        }
        prop_assert_eq!(calc(&format!("({text})")), calc(&text));
    }

    #[test]
    fn evaluation_is_idempotent(input in "[0-9.+*/() \\-]{0,30}") {
        prop_assert_eq!(calc(&input), calc(&input));
    }
}
