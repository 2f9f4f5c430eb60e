//! Arithmetic expression lexical analyzer
//!
//! This crate converts an expression string into a sequence of tokens
//! (numbers, the four binary operators, parentheses) and defines the
//! [`ErrorKind`] taxonomy shared by the whole evaluation pipeline.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::{CalcResult, ErrorKind};
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Operator, Token, TokenType};
