use crate::{lexer::tokens::Token, Span};

/// Expression Kinds
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExprKind {
    Literal,
    Unary,
    Binary,
    Call,
}

/// What a literal token stands for.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LiteralKind {
    Number,
    String,
    Boolean,
    Variable,
}

/// Expression
///
/// A node of the expression tree. Children are owned through `Box`/`Vec`,
/// so the tree never shares nodes and each variant carries exactly the
/// operands it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A factor: number, string, boolean or identifier.
    Literal { kind: LiteralKind, token: Token },
    /// A prefix operator applied to a whole sub-expression.
    Unary { operator: Token, operand: Box<Expr> },
    /// `left operator right`
    Binary {
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `callee(arguments...)`; `paren` is the opening parenthesis.
    Call {
        paren: Token,
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn literal(kind: LiteralKind, token: Token) -> Self {
        Expr::Literal { kind, token }
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: Token, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(paren: Token, callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            paren,
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Literal { .. } => ExprKind::Literal,
            Expr::Unary { .. } => ExprKind::Unary,
            Expr::Binary { .. } => ExprKind::Binary,
            Expr::Call { .. } => ExprKind::Call,
        }
    }

    /// The token that defines this node.
    ///
    /// For calls this is the callee's lexeme, so diagnostics point at the
    /// function name rather than the parenthesis.
    pub fn lexeme(&self) -> &Token {
        match self {
            Expr::Literal { token, .. } => token,
            Expr::Unary { operator, .. } | Expr::Binary { operator, .. } => operator,
            Expr::Call { callee, .. } => callee.lexeme(),
        }
    }

    /// The textual spelling of this node: operator symbol or literal text.
    pub fn label(&self) -> &str {
        &self.lexeme().value
    }

    /// Children in source order.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Literal { .. } => vec![],
            Expr::Unary { operand, .. } => vec![operand.as_ref()],
            Expr::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expr::Call {
                callee, arguments, ..
            } => std::iter::once(callee.as_ref()).chain(arguments.iter()).collect(),
        }
    }

    /// Span from the first to the last token belonging to this node.
    ///
    /// A call ends at its last argument, not at the closing parenthesis,
    /// which is not kept in the tree.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { token, .. } => token.span.clone(),
            Expr::Unary { operator, operand } => Span {
                start: operator.span.start.clone(),
                end: operand.span().end,
            },
            Expr::Binary { left, right, .. } => Span {
                start: left.span().start,
                end: right.span().end,
            },
            Expr::Call {
                paren,
                callee,
                arguments,
            } => Span {
                start: callee.span().start,
                end: arguments
                    .last()
                    .map(|argument| argument.span().end)
                    .unwrap_or_else(|| paren.span.end.clone()),
            },
        }
    }

    /// Same shape and labels, ignoring source positions.
    pub fn is_isomorphic(&self, other: &Expr) -> bool {
        if self.kind() != other.kind() || self.label() != other.label() {
            return false;
        }

        if let (Expr::Literal { kind: a, .. }, Expr::Literal { kind: b, .. }) = (self, other) {
            return a == b;
        }

        let (ours, theirs) = (self.children(), other.children());
        ours.len() == theirs.len()
            && ours
                .iter()
                .zip(theirs.iter())
                .all(|(a, b)| a.is_isomorphic(b))
    }
}
