//! Forward cursor over a tokenized expression

use calc_lexer::Token;

/// A cursor over the tokens of one expression
pub struct TokenStream<'a> {
    /// The tokens being evaluated
    tokens: &'a [Token],
    /// Current position in the token stream
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new token stream from a slice of tokens
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Get the next token and advance the position
    pub fn next_token(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// The most recently consumed token
    pub fn previous(&self) -> Option<&'a Token> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
    }
}
