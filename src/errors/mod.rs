//! Error types and error handling for the expression parser.
//!
//! This module defines the error types used from tokenizing through parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexer, the token stream and the parser
//! - Helpful error messages and suggestions

pub mod errors;
