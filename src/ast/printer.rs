//! Canonical text forms of an expression tree.
//!
//! `Display` writes a fully parenthesized serialization that the lexer and
//! parser read back into an isomorphic tree. `tree()` writes an indented
//! outline for humans.

use std::fmt::{Display, Formatter, Result, Write};

use super::ast::Expr;

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Literal { token, .. } => write!(f, "{}", token.value),
            Expr::Unary { operator, operand } => write!(f, "({}{})", operator.value, operand),
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator.value, right),
            Expr::Call {
                callee, arguments, ..
            } => {
                write!(f, "{}(", callee)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Expr {
    /// One node per line, children indented by two spaces.
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}{:?} {}", "  ".repeat(depth), self.kind(), self.label());

        for child in self.children() {
            child.write_tree(out, depth + 1);
        }
    }
}
