//! Expression tree nodes and the single-token builders.

use std::fmt;

use super::token::{Token, TokenKind};
use crate::error::ParseError;

/// Unary functions understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sine,
    Cosine,
    Tangent,
    Secant,
    Cosecant,
    Cotangent,
    Arcsine,
    Arccosine,
    Arctangent,
    NaturalLog,
    Exp,
}

/// Name table for function identifiers. Matching is case sensitive.
pub const FUNCTIONS: [(&str, Function); 11] = [
    ("sin", Function::Sine),
    ("cos", Function::Cosine),
    ("tan", Function::Tangent),
    ("sec", Function::Secant),
    ("csc", Function::Cosecant),
    ("cot", Function::Cotangent),
    ("asin", Function::Arcsine),
    ("acos", Function::Arccosine),
    ("atan", Function::Arctangent),
    ("log", Function::NaturalLog),
    ("exp", Function::Exp),
];

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        FUNCTIONS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, function)| function)
    }

    pub fn name(self) -> &'static str {
        FUNCTIONS
            .iter()
            .find(|(_, function)| *function == self)
            .map(|&(name, _)| name)
            .unwrap_or("?")
    }

    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Sine => arg.sin(),
            Function::Cosine => arg.cos(),
            Function::Tangent => arg.tan(),
            Function::Secant => 1.0 / arg.cos(),
            Function::Cosecant => 1.0 / arg.sin(),
            Function::Cotangent => 1.0 / arg.tan(),
            Function::Arcsine => arg.asin(),
            Function::Arccosine => arg.acos(),
            Function::Arctangent => arg.atan(),
            Function::NaturalLog => arg.ln(),
            Function::Exp => arg.exp(),
        }
    }
}

/// Binary operators, in the order `+ - * / ^`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => left.powf(right),
        }
    }
}

/// A node of an expression tree. Each variant owns exactly as many children
/// as its arity, so a half-built node cannot exist.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Constant(f64),
    Variable,
    Unary(Function, Box<Node>),
    Binary(Operator, Box<Node>, Box<Node>),
}

impl Node {
    /// Number of nodes in the subtree rooted here, this one included.
    pub fn count(&self) -> usize {
        match self {
            Node::Constant(_) | Node::Variable => 1,
            Node::Unary(_, arg) => 1 + arg.count(),
            Node::Binary(_, left, right) => 1 + left.count() + right.count(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Constant(_) | Node::Variable => 1,
            Node::Unary(_, arg) => 1 + arg.depth(),
            Node::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Fully parenthesised rendering, e.g. `((2 ^ 3) ^ 2)` or `sin(x)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(value) => write!(f, "{}", value),
            Node::Variable => write!(f, "x"),
            Node::Unary(function, arg) => write!(f, "{}({})", function.name(), arg),
            Node::Binary(op, left, right) => write!(f, "({} {} {})", left, op.symbol(), right),
        }
    }
}

/// The head of an interior node before its children are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interior {
    Operator(Operator),
    Function(Function),
}

/// Converts a numeric literal the way C's `strtod` would: the longest prefix
/// shaped like `-? digits* (. digits*)?` is converted, and text with no usable
/// prefix gives `0.0`.
pub fn parse_number(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Builds a leaf from a `Number` or `Variable` token.
pub fn build_leaf(token: &Token) -> Result<Node, ParseError> {
    match token.kind {
        TokenKind::Number => Ok(Node::Constant(parse_number(&token.text))),
        TokenKind::Variable => Ok(Node::Variable),
        TokenKind::Identifier if Function::from_name(&token.text).is_none() => {
            Err(ParseError::UnknownFunction {
                name: token.text.clone(),
                offset: token.offset,
            })
        }
        _ => Err(ParseError::NotAValue {
            text: token.text.clone(),
            offset: token.offset,
        }),
    }
}

/// Maps an operator or function-name token to the head of an interior node.
pub fn build_interior(token: &Token) -> Result<Interior, ParseError> {
    match token.kind {
        TokenKind::Operator => Operator::from_symbol(token.symbol())
            .map(Interior::Operator)
            .ok_or_else(|| ParseError::NotAValue {
                text: token.text.clone(),
                offset: token.offset,
            }),
        TokenKind::Identifier => Function::from_name(&token.text)
            .map(Interior::Function)
            .ok_or_else(|| ParseError::UnknownFunction {
                name: token.text.clone(),
                offset: token.offset,
            }),
        _ => Err(ParseError::NoSplitPoint {
            offset: token.offset,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, 0)
    }

    #[test]
    fn number_conversion_follows_longest_prefix() {
        assert_eq!(parse_number("45"), 45.0);
        assert_eq!(parse_number("-4.5"), -4.5);
        assert_eq!(parse_number("1.2.3"), 1.2);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("-.25"), -0.25);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("-."), 0.0);
        assert_eq!(parse_number(".."), 0.0);
    }

    #[test]
    fn leaves_from_numbers_and_x() {
        assert_eq!(build_leaf(&token(TokenKind::Number, "2.5")), Ok(Node::Constant(2.5)));
        assert_eq!(build_leaf(&token(TokenKind::Variable, "x")), Ok(Node::Variable));
    }

    #[test]
    fn other_tokens_are_not_leaves() {
        assert!(matches!(
            build_leaf(&token(TokenKind::Operator, "+")),
            Err(ParseError::NotAValue { .. })
        ));
        assert!(matches!(
            build_leaf(&token(TokenKind::OpenParen, "(")),
            Err(ParseError::NotAValue { .. })
        ));
        assert!(matches!(
            build_leaf(&token(TokenKind::Identifier, "sin")),
            Err(ParseError::NotAValue { .. })
        ));
        assert_eq!(
            build_leaf(&token(TokenKind::Identifier, "sinx")),
            Err(ParseError::UnknownFunction {
                name: "sinx".to_string(),
                offset: 0
            })
        );
    }

    #[test]
    fn operators_map_to_interior_heads() {
        let cases = [
            ("+", Operator::Add),
            ("-", Operator::Subtract),
            ("*", Operator::Multiply),
            ("/", Operator::Divide),
            ("^", Operator::Power),
        ];
        for (text, op) in cases {
            assert_eq!(
                build_interior(&token(TokenKind::Operator, text)),
                Ok(Interior::Operator(op))
            );
        }
    }

    #[test]
    fn every_table_entry_builds() {
        for (name, function) in FUNCTIONS {
            assert_eq!(
                build_interior(&token(TokenKind::Identifier, name)),
                Ok(Interior::Function(function))
            );
            assert_eq!(function.name(), name);
        }
    }

    #[test]
    fn function_names_are_case_sensitive() {
        assert!(matches!(
            build_interior(&token(TokenKind::Identifier, "Sin")),
            Err(ParseError::UnknownFunction { .. })
        ));
        assert!(matches!(
            build_interior(&token(TokenKind::Identifier, "ln")),
            Err(ParseError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn leaves_cannot_head_interior_nodes() {
        assert!(build_interior(&token(TokenKind::Number, "1")).is_err());
        assert!(build_interior(&token(TokenKind::Variable, "x")).is_err());
        assert!(build_interior(&token(TokenKind::CloseParen, ")")).is_err());
    }

    #[test]
    fn display_is_fully_parenthesised() {
        let node = Node::Binary(
            Operator::Add,
            Box::new(Node::Unary(Function::Sine, Box::new(Node::Variable))),
            Box::new(Node::Constant(0.5)),
        );
        assert_eq!(node.to_string(), "(sin(x) + 0.5)");
        assert_eq!(node.count(), 4);
        assert_eq!(node.depth(), 3);
    }
}
