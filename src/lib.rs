#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::lexer::tokenize,
    parser::{
        parser::{parse_expression, ExprParser},
        stream::{PeekTokenStream, TokenStream},
    },
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes `source` and parses exactly one expression from it.
///
/// Anything left over after the expression is reported as an
/// `UnexpectedToken` error at the first unconsumed token.
pub fn parse_source(source: &str, file: Option<String>, parser: &ExprParser) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    let mut stream = PeekTokenStream::new(tokens);

    let expr = parse_expression(&mut stream, parser)?;

    if stream.has_next() {
        let token = stream.peek()?;
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(expr)
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within the line.
/// An offset at the very end of the source maps onto the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character
    match content.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => Some((line_number - 1, line.to_string(), line.len())),
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Formats `error` as a caret diagnostic against `source`.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> <expr>
          |
        1 | (1+2
          | ----^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        parser::parser::ExprParser,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("(1+2", 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "(1+2");
        assert_eq!(line_pos, 4);

        assert!(super::get_line_at_position("(1+2", 5).is_none());
    }

    #[test]
    fn test_render_error_points_at_offset() {
        let error = Error::new(
            ErrorImpl::TokenMismatch {
                expected: ")".to_string(),
                actual: "EOF".to_string(),
            },
            Position(4, Rc::new("<expr>".to_string())),
        );

        let rendered = super::render_error(&error, "(1+2");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: TokenMismatch (Expected `)`, found `EOF`)");
        assert_eq!(lines[1], "-> <expr>");
        assert_eq!(lines[3], "1 | (1+2");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_parse_source_rejects_leftover_tokens() {
        let error = super::parse_source("1 2", None, &ExprParser::default()).unwrap_err();

        assert_eq!(error.get_error_name(), "UnexpectedToken");
        assert_eq!(error.get_position().0, 2);
    }

    #[test]
    fn test_parse_source_single_expression() {
        let expr = super::parse_source("a + b * c", None, &ExprParser::default()).unwrap();

        assert_eq!(expr.to_string(), "(a + (b * c))");
    }
}
