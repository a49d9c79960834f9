use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A failure raised while tokenizing, configuring or parsing, tagged with
/// the source position it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TokenMismatch { .. } => "TokenMismatch",
            ErrorImpl::StreamExhausted => "StreamExhausted",
            ErrorImpl::InvalidPriorityTable { .. } => "InvalidPriorityTable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected end of expression",
                token
            )),
            ErrorImpl::TokenMismatch { expected, actual } => {
                ErrorTip::Suggestion(format!("Expected `{}`, found `{}`", expected, actual))
            }
            ErrorImpl::StreamExhausted => {
                ErrorTip::Suggestion(String::from("Input ended in the middle of an expression"))
            }
            ErrorImpl::InvalidPriorityTable { message } => {
                ErrorTip::Suggestion(format!("Invalid priority table: {}", message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("token mismatch: expected {expected:?}, found {actual:?}")]
    TokenMismatch { expected: String, actual: String },
    #[error("token stream exhausted")]
    StreamExhausted,
    #[error("invalid priority table: {message}")]
    InvalidPriorityTable { message: String },
}
