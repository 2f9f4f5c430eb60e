//! Shunting-yard evaluation over a token slice.
//!
//! Numbers go straight to the operand stack; operators wait on the operator
//! stack until something of lower precedence (or the end of a group) forces
//! them to be applied. Grammar errors are caught during the scan by looking
//! at the previous token, so the first violation is reported immediately.

use calc_lexer::{CalcResult, ErrorKind, Operator, Token, TokenType};

use crate::precedence::binds_before;
use crate::token_stream::TokenStream;

/// An entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    /// Barrier for a `(` that has not been closed yet
    LeftParen,
}

/// Both stacks of one evaluation call
#[derive(Debug, Default)]
struct ParserState {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl ParserState {
    fn push_operand(&mut self, value: f64) {
        self.operands.push(value);
    }

    /// Pop two operands, combine them with `op` and push the result
    fn apply(&mut self, op: Operator) -> CalcResult<()> {
        let right = self.operands.pop().ok_or(ErrorKind::NotEnoughValues)?;
        let left = self.operands.pop().ok_or(ErrorKind::NotEnoughValues)?;
        let value = apply_operator(op, left, right)?;
        log::trace!("{left} {op} {right} = {value}");
        self.operands.push(value);
        Ok(())
    }

    /// Apply stacked operators that bind at least as tightly as `incoming`,
    /// then stack `incoming`
    fn push_operator(&mut self, incoming: Operator) -> CalcResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if !binds_before(top, incoming) {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(Pending::Operator(incoming));
        Ok(())
    }

    /// Apply operators back to the innermost `(` and discard it
    fn close_group(&mut self) -> CalcResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.apply(op)?,
                Some(Pending::LeftParen) => return Ok(()),
                None => return Err(ErrorKind::MismatchedParentheses),
            }
        }
    }

    /// Apply everything left and hand back the single remaining value
    fn finish(mut self) -> CalcResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.apply(op)?,
                Pending::LeftParen => return Err(ErrorKind::MismatchedParentheses),
            }
        }
        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(ErrorKind::InvalidExpression),
        }
    }
}

/// Combine two operands. The right operand of `/` must not be zero, and the
/// result must stay finite.
pub fn apply_operator(op: Operator, left: f64, right: f64) -> CalcResult<f64> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(ErrorKind::DivisionByZero);
            }
            left / right
        }
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ErrorKind::InvalidExpression)
    }
}

/// Whether an operand (number or `(`) may legally follow `previous`
fn expects_operand(previous: Option<TokenType>) -> bool {
    matches!(
        previous,
        None | Some(TokenType::Operator(_)) | Some(TokenType::LeftParen)
    )
}

/// Evaluate a token sequence to a single number.
pub fn evaluate(tokens: &[Token]) -> CalcResult<f64> {
    let mut stream = TokenStream::new(tokens);
    let mut state = ParserState::default();

    while let Some(token) = stream.peek() {
        let previous = stream.previous().map(|t| t.token_type);
        stream.next_token();

        let step = match token.token_type {
            TokenType::Number(value) => {
                if expects_operand(previous) {
                    state.push_operand(value);
                    Ok(())
                } else {
                    Err(ErrorKind::InvalidExpression)
                }
            }
            TokenType::Operator(op) => {
                if expects_operand(previous) {
                    Err(ErrorKind::InvalidOperator)
                } else {
                    state.push_operator(op)
                }
            }
            TokenType::LeftParen => {
                if expects_operand(previous) {
                    state.operators.push(Pending::LeftParen);
                    Ok(())
                } else {
                    Err(ErrorKind::InvalidExpression)
                }
            }
            TokenType::RightParen => match previous {
                Some(TokenType::Operator(_)) => Err(ErrorKind::OperatorAtEnd),
                // `()` holds no value
                Some(TokenType::LeftParen) => Err(ErrorKind::InvalidExpression),
                _ => state.close_group(),
            },
        };

        if let Err(kind) = step {
            log::debug!("evaluation failed with {kind:?} at {token}");
            return Err(kind);
        }
    }

    match stream.previous().map(|t| t.token_type) {
        Some(TokenType::Operator(_)) => Err(ErrorKind::OperatorAtEnd),
        Some(TokenType::LeftParen) => Err(ErrorKind::MismatchedParentheses),
        None => Err(ErrorKind::InvalidExpression),
        _ => state.finish(),
    }
}
