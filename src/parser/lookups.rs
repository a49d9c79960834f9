use std::{rc::Rc, str::FromStr};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::stream::TokenStream;

/// Parses one factor (literal or identifier) from the stream.
///
/// Returns `Ok(None)` without consuming anything when the next token cannot
/// start a factor.
pub type FactorHandler = fn(&mut dyn TokenStream) -> Result<Option<Expr>, Error>;

/// Binary operator levels, loosest first.
const DEFAULT_PRIORITIES: &[&[&str]] = &[
    &["&&", "||"],
    &["&", "|", "^"],
    &["==", "!=", ">", "<", ">=", "<="],
    &["+", "-"],
    &["*", "/", "%"],
    &["<<", ">>"],
];

// Spellings the engine itself gives meaning to.
const RESERVED_SPELLINGS: &[&str] = &["(", ")", ","];

/// Binary operator precedence levels.
///
/// Level 0 binds loosest and ends up topmost in the tree; the last level
/// binds tightest. Operators on the same level share binding strength and
/// associate left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityTable {
    levels: Vec<Vec<String>>,
}

impl PriorityTable {
    pub fn new(levels: Vec<Vec<String>>) -> Result<Self, Error> {
        if levels.is_empty() {
            return Err(invalid("no precedence levels given"));
        }

        for (level, operators) in levels.iter().enumerate() {
            if operators.is_empty() {
                return Err(invalid(&format!("level {} is empty", level)));
            }

            for operator in operators {
                if RESERVED_SPELLINGS.contains(&operator.as_str()) {
                    return Err(invalid(&format!("`{}` cannot be a binary operator", operator)));
                }

                let first = levels
                    .iter()
                    .position(|ops| ops.contains(operator))
                    .unwrap_or(level);
                if first != level || operators.iter().filter(|op| *op == operator).count() > 1 {
                    return Err(invalid(&format!("operator `{}` is listed more than once", operator)));
                }
            }
        }

        Ok(PriorityTable { levels })
    }

    /// Number of precedence levels.
    pub fn size(&self) -> usize {
        self.levels.len()
    }

    pub fn is_at_level(&self, level: usize, operator: &str) -> bool {
        self.levels
            .get(level)
            .is_some_and(|operators| operators.iter().any(|op| op == operator))
    }

    pub fn level_of(&self, operator: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|operators| operators.iter().any(|op| op == operator))
    }

    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        PriorityTable {
            levels: DEFAULT_PRIORITIES
                .iter()
                .map(|operators| operators.iter().map(|op| op.to_string()).collect())
                .collect(),
        }
    }
}

/// Reads levels separated by `;`, operators separated by whitespace,
/// e.g. `"+ -; * /"`.
impl FromStr for PriorityTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels = s
            .split(';')
            .map(|level| level.split_whitespace().map(String::from).collect())
            .collect();

        PriorityTable::new(levels)
    }
}

fn invalid(message: &str) -> Error {
    Error::new(
        ErrorImpl::InvalidPriorityTable {
            message: message.to_string(),
        },
        Position(0, Rc::new(String::from("<priorities>"))),
    )
}
