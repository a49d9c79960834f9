//! Token streams consumed by the expression parser.
//!
//! The parser only ever looks one token ahead and never un-consumes a token,
//! so the whole contract is `has_next`, `peek` and `next_match`.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A lookahead-capable cursor over tokens.
pub trait TokenStream {
    /// Returns true while at least one token remains.
    fn has_next(&self) -> bool;

    /// Returns the next token without consuming it.
    fn peek(&self) -> Result<&Token, Error>;

    /// Consumes the next token if its spelling equals `expected`.
    ///
    /// Fails with `TokenMismatch` otherwise, reporting `EOF` as the actual
    /// spelling when the stream is exhausted.
    fn next_match(&mut self, expected: &str) -> Result<Token, Error>;

    /// Position of the next token, or of the end of input.
    fn position(&self) -> Position;
}

/// A `TokenStream` over a vector of tokens produced by the lexer.
pub struct PeekTokenStream {
    tokens: Vec<Token>,
    pos: usize,
    end: Position,
}

impl PeekTokenStream {
    /// Creates a stream over `tokens`.
    ///
    /// A trailing `EOF` token is not part of the stream; its position is kept
    /// to report errors at the end of input.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let end = match tokens.last() {
            Some(token) if token.kind == TokenKind::EOF => {
                let position = token.span.start.clone();
                tokens.pop();
                position
            }
            Some(token) => token.span.end.clone(),
            None => Position(0, Rc::new(String::from("<expr>"))),
        };

        PeekTokenStream {
            tokens,
            pos: 0,
            end,
        }
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

impl TokenStream for PeekTokenStream {
    fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    fn peek(&self) -> Result<&Token, Error> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| Error::new(ErrorImpl::StreamExhausted, self.end.clone()))
    }

    fn next_match(&mut self, expected: &str) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) if token.value == expected => {
                self.pos += 1;
                Ok(token.clone())
            }
            Some(token) => Err(Error::new(
                ErrorImpl::TokenMismatch {
                    expected: expected.to_string(),
                    actual: token.value.clone(),
                },
                token.span.start.clone(),
            )),
            None => Err(Error::new(
                ErrorImpl::TokenMismatch {
                    expected: expected.to_string(),
                    actual: String::from("EOF"),
                },
                self.end.clone(),
            )),
        }
    }

    fn position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => self.end.clone(),
        }
    }
}
