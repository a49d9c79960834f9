use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenParen,
    CloseParen,
    Comma,

    Equals,    // ==
    Not,       // !
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,

    Or,
    And,
    Pipe,
    Ampersand,
    Caret,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.value, self.span.start.0)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether this token can stand on its own as a factor.
    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Number,
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::True,
            TokenKind::False,
        ])
    }
}
