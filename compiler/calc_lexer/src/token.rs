//! Token types produced by the lexer

use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column are 1-based and count characters; the offset is the
/// 0-based byte offset from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number
    pub column: usize,
    /// The 0-based byte offset from the start of the input
    pub offset: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// All operators, in table order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The source symbol for this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The kind of a token, carrying its value where it has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenType {
    /// A numeric literal
    Number(f64),
    /// One of `+ - * /`
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Number(n) => write!(f, "{n}"),
            TokenType::Operator(op) => write!(f, "{op}"),
            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub token_type: TokenType,
    /// The exact source text of the token
    pub lexeme: String,
    /// Where the token starts in the input
    pub location: Location,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}", self.lexeme, self.location)
    }
}
