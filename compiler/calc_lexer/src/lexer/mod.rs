//! Lexer implementation for arithmetic expressions
//! Converts an input string into a stream of tokens for the evaluator

use logos::Logos;
use std::ops::Range;

use crate::error::{CalcResult, ErrorKind};
use crate::token::{Location, Operator, Token, TokenType};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The input being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset the line/column counters refer to
    offset: usize,
    /// Set once an error has been yielded; the lexer is fused after that
    failed: bool,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            failed: false,
            inner: LogosToken::lexer(source),
        }
    }

    /// Advance the line/column counters to the start of `span`.
    /// Counts characters, not bytes, so multi-byte input keeps columns right.
    fn sync_position_to(&mut self, span: &Range<usize>) -> Location {
        let text = self.source.get(self.offset..span.start).unwrap_or_default();

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    // \r\n counts as one line break
                    if iter.peek() == Some(&'\n') {
                        iter.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }

        self.offset = span.start;
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Convert a LogosToken to our semantic TokenType
    fn convert_token(logos_token: LogosToken) -> TokenType {
        match logos_token {
            LogosToken::Number(n) => TokenType::Number(n),
            LogosToken::Plus => TokenType::Operator(Operator::Add),
            LogosToken::Minus => TokenType::Operator(Operator::Sub),
            LogosToken::Star => TokenType::Operator(Operator::Mul),
            LogosToken::Slash => TokenType::Operator(Operator::Div),
            LogosToken::LeftParen => TokenType::LeftParen,
            LogosToken::RightParen => TokenType::RightParen,
        }
    }

    /// Get the next token from the input.
    ///
    /// Returns `None` at the end of input. After the first error the lexer
    /// yields nothing further.
    pub fn next_token(&mut self) -> Option<CalcResult<Token>> {
        if self.failed {
            return None;
        }

        let result = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = self.source.get(span.clone()).unwrap_or_default();
        let location = self.sync_position_to(&span);

        match result {
            Ok(logos_token) => {
                let token = Token::new(Self::convert_token(logos_token), lexeme, location);
                log::trace!("lexed {:?} at {}", token.token_type, location);
                Some(Ok(token))
            }
            Err(kind) => {
                log::debug!("lexer error {kind:?} on '{lexeme}' at {location}");
                self.failed = true;
                Some(Err(kind))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = CalcResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize a whole expression.
///
/// Empty or whitespace-only input fails with [`ErrorKind::EmptyInput`] before
/// any token is produced; otherwise the first lexical error wins.
pub fn tokenize(input: &str) -> CalcResult<Vec<Token>> {
    if input.trim_matches(|c: char| c.is_ascii_whitespace()).is_empty() {
        return Err(ErrorKind::EmptyInput);
    }
    Lexer::new(input).collect()
}
