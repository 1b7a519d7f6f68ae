//! Formulas in one free variable `x`.
//!
//! `Expression::parse` turns text such as `sin(3 * x + 4) + x ^ -5` into an
//! owned tree, and `Expression::evaluate` computes it for a given `x`.
//! Supported: decimal literals, `x`, `+ - * / ^`, parentheses and the
//! functions `sin cos tan sec csc cot asin acos atan log exp` (`log` is the
//! natural log).
//!
//! A leading `-` is only a sign when it touches a digit: `-3 * x` parses,
//! `-x` does not, and `x-1` is the two values `x` and `-1` side by side.

pub mod eval;
pub mod node;
pub mod parser;
pub mod token;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub use eval::evaluate;
pub use node::{Function, Node, Operator};
pub use parser::{parse_range, parse_tokens};
pub use token::{tokenize, Token, TokenKind};

/// A parsed formula, ready to be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source);
        match parse_tokens(&tokens) {
            Ok(root) => {
                log::debug!("parsed {:?} into {} nodes", source, root.count());
                Ok(Expression {
                    source: source.to_string(),
                    root,
                })
            }
            Err(e) => {
                log::debug!("could not parse {:?}: {}", source, e);
                Err(e)
            }
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate(&self.root, x)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    pub fn into_root(self) -> Node {
        self.root
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Shorthand for [`Expression::parse`].
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    Expression::parse(source)
}
