//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts expression source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Recognition of identifiers, literals, punctuation and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
