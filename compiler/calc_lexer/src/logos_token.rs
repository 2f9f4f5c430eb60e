//! Raw token definitions for the logos-generated scanner

use logos::Logos;

use crate::error::ErrorKind;

/// Raw tokens as recognised by the generated DFA.
///
/// Anything no rule matches becomes `ErrorKind::default()`, i.e.
/// `UnexpectedToken`. Number literals are validated by `parse_number`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ErrorKind)]
#[logos(skip r"[ \t\r\n\x0C]+")]
pub enum LogosToken {
    // A maximal run of digits and dots, so that `2..5` is seen as a single
    // malformed literal instead of two numbers
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
}

fn parse_number(lex: &mut logos::Lexer<LogosToken>) -> Result<f64, ErrorKind> {
    let slice = lex.slice();
    if slice.bytes().filter(|&b| b == b'.').count() > 1 {
        return Err(ErrorKind::MultipleDecimalPoints);
    }
    match slice.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ErrorKind::InvalidNumber),
    }
}
