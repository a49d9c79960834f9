//! Parser module for building expression trees.
//!
//! This module contains the precedence-climbing parser that transforms a
//! stream of tokens into an `Expr`. It handles:
//!
//! - Binary operators by precedence level, all left-associative
//! - Prefix operators and parenthesized grouping
//! - Function calls with comma-separated arguments
//! - Fail-fast error reporting
//!
//! Precedence is configured by a `PriorityTable` of operator levels rather
//! than per-operator binding powers.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stream;
