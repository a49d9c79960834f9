//! Parser configuration and the expression entry point.
//!
//! `ExprParser` bundles the read-only configuration a parse needs: the
//! operator priority table and the handler used for factors. It is passed
//! by reference down through every grammar function, so nothing about a
//! parse lives in global state.

use crate::{ast::ast::Expr, errors::errors::Error};

use super::{
    expr::{parse_factor, require_expr},
    lookups::{FactorHandler, PriorityTable},
    stream::TokenStream,
};

/// Configuration for parsing expressions.
#[derive(Clone)]
pub struct ExprParser {
    /// Binary operator levels, loosest first
    priorities: PriorityTable,
    /// Parses literals and identifiers
    factor_handler: FactorHandler,
}

impl ExprParser {
    pub fn new(priorities: PriorityTable, factor_handler: FactorHandler) -> Self {
        ExprParser {
            priorities,
            factor_handler,
        }
    }

    /// Uses `priorities` with the default factor handler.
    pub fn with_priorities(priorities: PriorityTable) -> Self {
        ExprParser::new(priorities, parse_factor)
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    pub fn factor_handler(&self) -> FactorHandler {
        self.factor_handler
    }
}

impl std::fmt::Debug for ExprParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExprParser")
            .field("priorities", &self.priorities)
            .finish_non_exhaustive()
    }
}

impl Default for ExprParser {
    fn default() -> Self {
        ExprParser::with_priorities(PriorityTable::default())
    }
}

/// Parses one expression from `stream`.
///
/// On success the stream is left just past the last token of the
/// expression; trailing tokens are not inspected. The first hard error
/// aborts the parse and is returned unchanged.
pub fn parse_expression(stream: &mut dyn TokenStream, parser: &ExprParser) -> Result<Expr, Error> {
    log::debug!(
        "Parsing expression at offset {} with {} precedence levels",
        stream.position().0,
        parser.priorities().size()
    );

    let expr = require_expr(stream, parser)?;

    log::debug!("Parsed {:?} `{}`", expr.kind(), expr);
    Ok(expr)
}
