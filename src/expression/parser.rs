//! Precedence parser over a token slice.
//!
//! Each call looks at a half-open range of the token slice, picks the token
//! that binds loosest outside any parentheses, makes it the root, and
//! recurses on the ranges to either side. Nothing is copied: every level
//! works on index bounds into the same slice.

use super::node::{build_interior, build_leaf, Interior, Node};
use super::token::{Token, TokenKind};
use crate::error::ParseError;

/// Candidate roots found at parenthesis depth 0.
#[derive(Debug, Default)]
struct SplitPoints {
    additive: Option<usize>,
    multiplicative: Option<usize>,
    power: Option<usize>,
    function: Option<usize>,
}

impl SplitPoints {
    /// Loosest binding tier wins. Every tier keeps its leftmost occurrence,
    /// so `2 - 3 - 4` reads as `2 - (3 - 4)`.
    fn branch(&self) -> Option<usize> {
        self.additive
            .or(self.multiplicative)
            .or(self.power)
            .or(self.function)
    }
}

fn scan(tokens: &[Token], start: usize, end: usize) -> Result<SplitPoints, ParseError> {
    let mut points = SplitPoints::default();
    let mut depth = 0usize;
    let mut outer_open = tokens[start].offset;

    for (i, token) in tokens.iter().enumerate().take(end).skip(start) {
        match token.kind {
            TokenKind::OpenParen => {
                if depth == 0 {
                    outer_open = token.offset;
                }
                depth += 1;
            }
            TokenKind::CloseParen => {
                if depth == 0 {
                    return Err(ParseError::UnbalancedParens {
                        offset: token.offset,
                    });
                }
                depth -= 1;
            }
            _ => {}
        }
        if depth > 0 {
            continue;
        }

        match token.kind {
            TokenKind::Identifier => {
                points.function.get_or_insert(i);
            }
            TokenKind::Operator => match token.symbol() {
                '+' | '-' => {
                    points.additive.get_or_insert(i);
                }
                '*' | '/' => {
                    points.multiplicative.get_or_insert(i);
                }
                '^' => {
                    points.power.get_or_insert(i);
                }
                _ => {}
            },
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedParens { offset: outer_open });
    }
    Ok(points)
}

/// Parses `tokens[start..end]` into a tree.
///
/// Fails on an empty range, on unbalanced parentheses, on an operator with
/// nothing on one side, and on a function name that is unknown or does not
/// open its range. Any subtree already built on a failing path is dropped.
pub fn parse_range(tokens: &[Token], start: usize, end: usize) -> Result<Node, ParseError> {
    if start >= end {
        return Err(ParseError::Empty);
    }
    if end - start == 1 {
        return build_leaf(&tokens[start]);
    }

    match scan(tokens, start, end)?.branch() {
        Some(branch) => split(tokens, start, end, branch),
        None => {
            let first = &tokens[start];
            let last = &tokens[end - 1];
            if first.kind != TokenKind::OpenParen || last.kind != TokenKind::CloseParen {
                return Err(ParseError::NoSplitPoint {
                    offset: first.offset,
                });
            }
            if end - start == 2 {
                return Err(ParseError::NotAValue {
                    text: "()".to_string(),
                    offset: first.offset,
                });
            }
            parse_range(tokens, start + 1, end - 1)
        }
    }
}

fn split(tokens: &[Token], start: usize, end: usize, branch: usize) -> Result<Node, ParseError> {
    let token = &tokens[branch];

    match build_interior(token)? {
        Interior::Operator(op) => {
            if branch == start || branch + 1 == end {
                return Err(ParseError::MissingOperand {
                    operator: op.symbol(),
                    offset: token.offset,
                });
            }
            let left = parse_range(tokens, start, branch)?;
            let right = parse_range(tokens, branch + 1, end)?;
            Ok(Node::Binary(op, Box::new(left), Box::new(right)))
        }
        Interior::Function(function) => {
            if branch != start {
                return Err(ParseError::MisplacedFunction {
                    name: token.text.clone(),
                    offset: token.offset,
                });
            }
            let arg = parse_range(tokens, start + 1, end)?;
            Ok(Node::Unary(function, Box::new(arg)))
        }
    }
}

/// Parses a whole token sequence.
pub fn parse_tokens(tokens: &[Token]) -> Result<Node, ParseError> {
    parse_range(tokens, 0, tokens.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::node::{Function, Operator};
    use crate::expression::token::tokenize;

    fn parse(input: &str) -> Result<Node, ParseError> {
        parse_tokens(&tokenize(input))
    }

    fn shape(input: &str) -> String {
        match parse(input) {
            Ok(node) => node.to_string(),
            Err(e) => format!("error: {}", e),
        }
    }

    #[test]
    fn single_tokens() {
        assert_eq!(parse("x"), Ok(Node::Variable));
        assert_eq!(parse("-2.5"), Ok(Node::Constant(-2.5)));
        assert!(matches!(parse("+"), Err(ParseError::NotAValue { .. })));
        assert!(matches!(parse("sin"), Err(ParseError::NotAValue { .. })));
    }

    #[test]
    fn precedence_tiers() {
        assert_eq!(shape("2 + 3 * 4"), "(2 + (3 * 4))");
        assert_eq!(shape("2 * 3 + 4"), "((2 * 3) + 4)");
        assert_eq!(shape("2 * x ^ 3"), "(2 * (x ^ 3))");
        assert_eq!(shape("(2 + 3) * 4"), "((2 + 3) * 4)");
    }

    #[test]
    fn leftmost_operator_of_a_tier_splits() {
        assert_eq!(shape("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
        assert_eq!(shape("2 - 3 - 4"), "(2 - (3 - 4))");
        assert_eq!(shape("8 / 4 / 2"), "(8 / (4 / 2))");
        assert_eq!(shape("1 - 2 + 3"), "(1 - (2 + 3))");
        assert_eq!(shape("6 / 2 * 3"), "(6 / (2 * 3))");
        assert_eq!(shape("1 * 2 + 3 * 4 - 5"), "((1 * 2) + ((3 * 4) - 5))");
    }

    #[test]
    fn function_application() {
        assert_eq!(shape("sin(x) + x"), "(sin(x) + x)");
        assert_eq!(shape("sin x"), "sin(x)");
        assert_eq!(shape("cos sin x"), "cos(sin(x))");
        assert_eq!(shape("sin x ^ 2"), "(sin(x) ^ 2)");
        assert_eq!(shape("exp(2 * x)"), "exp((2 * x))");
        assert_eq!(
            parse("log(x)"),
            Ok(Node::Unary(Function::NaturalLog, Box::new(Node::Variable)))
        );
    }

    #[test]
    fn function_must_lead_its_range() {
        assert_eq!(
            parse("x sin"),
            Err(ParseError::MisplacedFunction {
                name: "sin".to_string(),
                offset: 2
            })
        );
        assert!(matches!(parse("2 cos(x)"), Err(ParseError::MisplacedFunction { .. })));
    }

    #[test]
    fn unknown_functions_fail() {
        assert_eq!(
            parse("foo(x)"),
            Err(ParseError::UnknownFunction {
                name: "foo".to_string(),
                offset: 0
            })
        );
        assert!(matches!(parse("sinx"), Err(ParseError::UnknownFunction { .. })));
        assert!(matches!(parse("1 + bar x"), Err(ParseError::UnknownFunction { .. })));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(parse("(2 + 3"), Err(ParseError::UnbalancedParens { offset: 0 }));
        assert_eq!(parse("2 + 3)"), Err(ParseError::UnbalancedParens { offset: 5 }));
        assert!(matches!(parse(")x("), Err(ParseError::UnbalancedParens { .. })));
        assert!(matches!(parse("(2)(3)"), Err(ParseError::UnbalancedParens { .. })));
    }

    #[test]
    fn redundant_parentheses_are_peeled() {
        assert_eq!(parse("((x))"), Ok(Node::Variable));
        assert_eq!(shape("(((1 + 2)))"), "(1 + 2)");
        assert!(matches!(parse("()"), Err(ParseError::NotAValue { .. })));
    }

    #[test]
    fn operators_need_both_operands() {
        assert_eq!(
            parse("-x"),
            Err(ParseError::MissingOperand {
                operator: '-',
                offset: 0
            })
        );
        assert!(matches!(parse("x +"), Err(ParseError::MissingOperand { operator: '+', .. })));
        assert!(matches!(parse("2 * + 3"), Err(ParseError::MissingOperand { .. })));
        assert!(matches!(parse("(+ x)"), Err(ParseError::MissingOperand { .. })));
    }

    #[test]
    fn adjacent_values_have_no_split_point() {
        assert!(matches!(parse("4 5"), Err(ParseError::NoSplitPoint { .. })));
        assert!(matches!(parse("x -1"), Err(ParseError::NoSplitPoint { .. })));
        assert_eq!(shape("x - 1"), "(x - 1)");
    }

    #[test]
    fn signed_literals_bind_to_their_number() {
        assert_eq!(
            parse("x ^ -5"),
            Ok(Node::Binary(
                Operator::Power,
                Box::new(Node::Variable),
                Box::new(Node::Constant(-5.0))
            ))
        );
        assert_eq!(shape("-3 * x"), "(-3 * x)");
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn parse_range_works_on_sub_slices() {
        let tokens = tokenize("1 + 2 * 3");
        assert_eq!(parse_range(&tokens, 2, 5).map(|n| n.to_string()), Ok("(2 * 3)".to_string()));
        assert_eq!(parse_range(&tokens, 0, 1), Ok(Node::Constant(1.0)));
        assert_eq!(parse_range(&tokens, 3, 3), Err(ParseError::Empty));
    }
}
