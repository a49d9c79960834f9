//! Integration tests for end-to-end expression parsing.
//!
//! These tests drive the public API from source text through tokenization,
//! parsing, serialization and diagnostics.

use climber::{
    ast::ast::{Expr, ExprKind},
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parse_source,
    parser::{
        lookups::PriorityTable,
        parser::{parse_expression, ExprParser},
        stream::{PeekTokenStream, TokenStream},
    },
    render_error,
};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Expr {
    parse_source(source, Some("test.expr".to_string()), &ExprParser::default()).unwrap()
}

#[test]
fn test_canonical_form_reparses_isomorphically() {
    let sources = [
        "1",
        "1+2*3",
        "1-2-3-4",
        "(1+2)*3",
        "!a+b",
        "(!a)+b",
        "++x * --y",
        "f(1, 2, 3)",
        "f()",
        "g(a + 1, h(b, c) << 2) == \"done\"",
        "a && b || c & d | e ^ f",
        "x >= 1 && x <= 10 || x != y % 3",
        "a << b >> c << d",
        "f(\"(\", \")\", \",\")",
    ];

    for source in sources {
        let first = parse(source);
        let canonical = first.to_string();
        let second = parse(&canonical);

        assert!(
            first.is_isomorphic(&second),
            "{} reparsed from {} as {}",
            source,
            canonical,
            second
        );
        assert_eq!(second.to_string(), canonical);
    }
}

#[test]
fn test_precedence_table_end_to_end() {
    assert_eq!(
        parse("a + b * c == d && e").to_string(),
        "(((a + (b * c)) == d) && e)"
    );
    assert_eq!(parse("1 + 2 << 3").to_string(), "(1 + (2 << 3))");
}

#[test]
fn test_whitespace_and_comments_are_ignored() {
    let expr = parse("  f( a ,\n b )  // trailing comment");

    assert_eq!(expr.kind(), ExprKind::Call);
    assert_eq!(expr.to_string(), "f(a, b)");
}

#[test]
fn test_tree_output() {
    assert_eq!(
        parse("f(1) - !x").tree(),
        "Binary -\n  Call f\n    Literal f\n    Literal 1\n  Unary !\n    Literal x\n"
    );
}

#[test]
fn test_spans_follow_source() {
    let expr = parse("alpha + beta(1)");
    let span = expr.span();

    assert_eq!(span.start.0, 0);
    assert_eq!(span.end.0, 14);
    assert_eq!(span.start.1.as_str(), "test.expr");
}

#[test]
fn test_several_expressions_from_one_stream() {
    let tokens = tokenize("1 + 2 ) f(x) ) !y".to_string(), None).unwrap();
    let mut stream = PeekTokenStream::new(tokens);
    let parser = ExprParser::default();

    let mut parsed = vec![];
    while stream.has_next() {
        parsed.push(parse_expression(&mut stream, &parser).unwrap().to_string());
        if stream.has_next() {
            stream.next_match(")").unwrap();
        }
    }

    assert_eq!(parsed, vec!["(1 + 2)", "f(x)", "(!y)"]);
}

#[test]
fn test_custom_priorities_end_to_end() {
    let parser = ExprParser::with_priorities("+; *".parse::<PriorityTable>().unwrap());
    let expr = parse_source("a * b + c * d", None, &parser).unwrap();

    assert_eq!(expr.to_string(), "((a * b) + (c * d))");

    let error = parse_source("a - b", None, &parser).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_missing_paren_diagnostic() {
    let source = "(1+2";
    let error = parse_source(source, None, &ExprParser::default()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TokenMismatch {
            expected: ")".to_string(),
            actual: "EOF".to_string(),
        }
    );
    assert_eq!(
        render_error(&error, source),
        "Error: TokenMismatch (Expected `)`, found `EOF`)\n-> <expr>\n  |\n1 | (1+2\n  | ----^\n"
    );
}

#[test]
fn test_diagnostic_on_second_line() {
    let source = "f(1,\n   2 3)";
    let error = parse_source(source, Some("multi.expr".to_string()), &ExprParser::default())
        .unwrap_err();

    assert_eq!(error.get_error_name(), "TokenMismatch");
    assert_eq!(
        render_error(&error, source),
        "Error: TokenMismatch (Expected `,`, found `3`)\n-> multi.expr\n  |\n2 | 2 3)\n  | --^\n"
    );
}

#[test]
fn test_lexer_errors_surface_from_parse_source() {
    let error = parse_source("a + #", None, &ExprParser::default()).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}
