//! Precedence-climbing expression grammar.
//!
//! With `k` ranging over the priority table levels and `t` the last level:
//!
//! ```text
//! E(k)  -> E(k+1) E_(k)
//! E(t)  -> F E_(t) | U E_(t)
//! E_(k) -> op(k) E(k+1) E_(k) | ε
//! U     -> "(" E(0) ")" | ("++" | "--" | "!") E(0)
//! F     -> factor | factor call
//! ```
//!
//! The continuation rule `E_` is right-recursive; `combine` folds each
//! continuation chain back into a left-associative tree.

use crate::{
    ast::ast::{Expr, LiteralKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{parser::ExprParser, stream::TokenStream};

pub type ParseResult<T> = Result<T, Error>;

const UNARY_OPERATORS: &[&str] = &["++", "--", "!"];

/// The `op operand op operand ...` suffix that follows a left operand at
/// one precedence level.
#[derive(Debug)]
pub struct Continuation {
    pub operator: Token,
    pub operand: Expr,
    pub rest: Option<Box<Continuation>>,
}

impl Continuation {
    /// Hangs the chain onto `left`.
    ///
    /// Every operator becomes the root of a new binary node whose left child
    /// is everything accumulated so far, so `a - b - c` yields
    /// `((a - b) - c)`.
    pub fn rotate(self, left: Expr) -> Expr {
        let mut tree = left;
        let mut link = Some(Box::new(self));

        while let Some(continuation) = link {
            let Continuation {
                operator,
                operand,
                rest,
            } = *continuation;

            log::trace!("Folding `{}` at offset {}", operator.value, operator.span.start.0);

            tree = Expr::binary(operator, tree, operand);
            link = rest;
        }

        tree
    }
}

/// Parses an expression at precedence level `k`.
pub fn parse_expr(
    stream: &mut dyn TokenStream,
    parser: &ExprParser,
    k: usize,
) -> ParseResult<Option<Expr>> {
    if k + 1 < parser.priorities().size() {
        return combine(
            stream,
            |s| parse_expr(s, parser, k + 1),
            |s| parse_continuation(s, parser, k),
        );
    }

    race(
        stream,
        |s| {
            combine(
                s,
                |s| parse_primary_expr(s, parser),
                |s| parse_continuation(s, parser, k),
            )
        },
        |s| {
            combine(
                s,
                |s| parse_unary_expr(s, parser),
                |s| parse_continuation(s, parser, k),
            )
        },
    )
}

/// Parses an optional level-`k` continuation.
///
/// An absent continuation is `Ok(None)`; an operator without an operand is
/// a `TokenMismatch`.
pub fn parse_continuation(
    stream: &mut dyn TokenStream,
    parser: &ExprParser,
    k: usize,
) -> ParseResult<Option<Continuation>> {
    if !stream.has_next() {
        return Ok(None);
    }

    let value = stream.peek()?.value.clone();
    if !parser.priorities().is_at_level(k, &value) {
        return Ok(None);
    }

    let operator = stream.next_match(&value)?;
    let operand = match parse_operand(stream, parser, k)? {
        Some(operand) => operand,
        None => return Err(expected_expression(stream)),
    };
    let rest = parse_continuation(stream, parser, k)?.map(Box::new);

    Ok(Some(Continuation {
        operator,
        operand,
        rest,
    }))
}

// The right operand of a level-`k` operator. On the last level this is a
// bare primary: letting it take its own continuation would make the
// tightest operators right-associative.
fn parse_operand(
    stream: &mut dyn TokenStream,
    parser: &ExprParser,
    k: usize,
) -> ParseResult<Option<Expr>> {
    if k + 1 < parser.priorities().size() {
        return parse_expr(stream, parser, k + 1);
    }

    race(
        stream,
        |s| parse_primary_expr(s, parser),
        |s| parse_unary_expr(s, parser),
    )
}

/// Glues a left operand to an optional continuation.
pub fn combine(
    stream: &mut dyn TokenStream,
    left: impl FnOnce(&mut dyn TokenStream) -> ParseResult<Option<Expr>>,
    continuation: impl FnOnce(&mut dyn TokenStream) -> ParseResult<Option<Continuation>>,
) -> ParseResult<Option<Expr>> {
    let Some(left) = left(stream)? else {
        if stream.has_next() {
            if let Some(orphan) = continuation(stream)? {
                // Operator with nothing on its left
                return Err(Error::new(
                    ErrorImpl::TokenMismatch {
                        expected: String::from("expression"),
                        actual: orphan.operator.value.clone(),
                    },
                    orphan.operator.span.start.clone(),
                ));
            }
        }
        return Ok(None);
    };

    if !stream.has_next() {
        return Ok(Some(left));
    }

    match continuation(stream)? {
        Some(continuation) => Ok(Some(continuation.rotate(left))),
        None => Ok(Some(left)),
    }
}

/// Tries `first`, then `second`; no match once input is exhausted.
pub fn race(
    stream: &mut dyn TokenStream,
    first: impl FnOnce(&mut dyn TokenStream) -> ParseResult<Option<Expr>>,
    second: impl FnOnce(&mut dyn TokenStream) -> ParseResult<Option<Expr>>,
) -> ParseResult<Option<Expr>> {
    if !stream.has_next() {
        return Ok(None);
    }

    match first(stream)? {
        Some(expr) => Ok(Some(expr)),
        None => second(stream),
    }
}

/// Grouping and prefix operators.
///
/// A prefix operator applies to a whole expression: `!a + b` is `!(a + b)`.
pub fn parse_unary_expr(stream: &mut dyn TokenStream, parser: &ExprParser) -> ParseResult<Option<Expr>> {
    if !stream.has_next() {
        return Ok(None);
    }

    let value = stream.peek()?.value.clone();

    if value == "(" {
        stream.next_match("(")?;
        let expr = require_expr(stream, parser)?;
        stream.next_match(")")?;
        return Ok(Some(expr));
    }

    if UNARY_OPERATORS.contains(&value.as_str()) {
        let operator = stream.next_match(&value)?;
        let operand = require_expr(stream, parser)?;
        return Ok(Some(Expr::unary(operator, operand)));
    }

    Ok(None)
}

/// A factor, turned into a call when followed by `(`.
pub fn parse_primary_expr(stream: &mut dyn TokenStream, parser: &ExprParser) -> ParseResult<Option<Expr>> {
    let Some(factor) = (parser.factor_handler())(stream)? else {
        return Ok(None);
    };

    if stream.has_next() && stream.peek()?.value == "(" {
        return parse_call_expr(stream, parser, factor).map(Some);
    }

    Ok(Some(factor))
}

/// Default factor handler: numbers, strings, booleans and identifiers.
pub fn parse_factor(stream: &mut dyn TokenStream) -> ParseResult<Option<Expr>> {
    if !stream.has_next() {
        return Ok(None);
    }

    let token = stream.peek()?;
    let kind = match token.kind {
        TokenKind::Number => LiteralKind::Number,
        TokenKind::String => LiteralKind::String,
        TokenKind::True | TokenKind::False => LiteralKind::Boolean,
        TokenKind::Identifier => LiteralKind::Variable,
        _ => return Ok(None),
    };

    let value = token.value.clone();
    let token = stream.next_match(&value)?;

    Ok(Some(Expr::literal(kind, token)))
}

/// Parses `(arg, arg, ...)` after an already parsed callee.
pub fn parse_call_expr(
    stream: &mut dyn TokenStream,
    parser: &ExprParser,
    callee: Expr,
) -> ParseResult<Expr> {
    let paren = stream.next_match("(")?;
    let mut arguments = vec![];

    loop {
        let Some(argument) = parse_expr(stream, parser, 0)? else {
            // A comma promised another argument
            if !arguments.is_empty() {
                return Err(expected_expression(stream));
            }
            break;
        };
        arguments.push(argument);

        if stream.has_next() && stream.peek()?.value != ")" {
            stream.next_match(",")?;
        } else {
            break;
        }
    }

    stream.next_match(")")?;

    Ok(Expr::call(paren, callee, arguments))
}

/// Parses a full expression that must be present.
pub fn require_expr(stream: &mut dyn TokenStream, parser: &ExprParser) -> ParseResult<Expr> {
    match parse_expr(stream, parser, 0)? {
        Some(expr) => Ok(expr),
        None => Err(expected_expression(stream)),
    }
}

fn expected_expression(stream: &dyn TokenStream) -> Error {
    let actual = match stream.peek() {
        Ok(token) => token.value.clone(),
        Err(_) => String::from("EOF"),
    };

    Error::new(
        ErrorImpl::TokenMismatch {
            expected: String::from("expression"),
            actual,
        },
        stream.position(),
    )
}
