//! Lexical segmentation of formula text.
//!
//! The tokenizer never fails: anything it does not recognise ends up in an
//! `Identifier` token and is rejected later, when the parser tries to look
//! the name up.
//!
//! Whitespace means `char::is_whitespace`, so Unicode spaces separate tokens
//! as well as ASCII ones.

use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Operator,
    OpenParen,
    CloseParen,
    Number,
    Variable,
    Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the first character in the source text.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, offset: usize) -> Self {
        Token {
            kind,
            text: text.to_string(),
            offset,
        }
    }

    /// First character of the token text. Operators and parens are a single character.
    pub fn symbol(&self) -> char {
        self.text.chars().next().unwrap_or('\0')
    }
}

fn in_number(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn in_identifier(c: char) -> bool {
    !c.is_whitespace() && !"+-*/^()".contains(c) && !in_number(c)
}

/// Consumes characters while `accept` holds and returns the byte offset just
/// past the last consumed one.
fn take_while(chars: &mut Peekable<CharIndices>, accept: fn(char) -> bool, len: usize) -> usize {
    while let Some(&(i, c)) = chars.peek() {
        if !accept(c) {
            return i;
        }
        chars.next();
    }
    len
}

/// Splits `input` into tokens, left to right.
///
/// Whitespace separates tokens and is otherwise dropped, so `"4 5"` gives two
/// numbers and `"45"` gives one. A `-` directly followed by a digit or `.`
/// starts a signed number; any other `-` is an operator.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    let len = input.len();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '+' | '*' | '/' | '^' => {
                chars.next();
                tokens.push(Token::new(TokenKind::Operator, &input[start..start + 1], start));
            }
            '(' => {
                chars.next();
                tokens.push(Token::new(TokenKind::OpenParen, "(", start));
            }
            ')' => {
                chars.next();
                tokens.push(Token::new(TokenKind::CloseParen, ")", start));
            }
            '-' => {
                chars.next();
                match chars.peek() {
                    Some(&(_, next)) if in_number(next) => {
                        let end = take_while(&mut chars, in_number, len);
                        tokens.push(Token::new(TokenKind::Number, &input[start..end], start));
                    }
                    _ => tokens.push(Token::new(TokenKind::Operator, "-", start)),
                }
            }
            _ if in_number(c) => {
                let end = take_while(&mut chars, in_number, len);
                tokens.push(Token::new(TokenKind::Number, &input[start..end], start));
            }
            _ => {
                let end = take_while(&mut chars, in_identifier, len);
                let text = &input[start..end];
                let kind = if text == "x" {
                    TokenKind::Variable
                } else {
                    TokenKind::Identifier
                };
                tokens.push(Token::new(kind, text, start));
            }
        }
    }

    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_example_from_docs() {
        assert_eq!(
            texts("sin(3 * x + 4) + x ^ -5"),
            vec!["sin", "(", "3", "*", "x", "+", "4", ")", "+", "x", "^", "-5"]
        );
    }

    #[test]
    fn whitespace_separates_numbers() {
        assert_eq!(texts("4 5"), vec!["4", "5"]);
        assert_eq!(texts("45"), vec!["45"]);
        assert_eq!(tokenize("4+5").len(), 3);
        assert_eq!(texts("4+5"), texts("  4 +\t5 "));
    }

    #[test]
    fn minus_before_digit_is_a_sign() {
        assert_eq!(kinds("-3"), vec![TokenKind::Number]);
        assert_eq!(kinds("-.5"), vec![TokenKind::Number]);
        assert_eq!(kinds("- 3"), vec![TokenKind::Operator, TokenKind::Number]);
        assert_eq!(kinds("-x"), vec![TokenKind::Operator, TokenKind::Variable]);
        assert_eq!(texts("--3"), vec!["-", "-3"]);
    }

    #[test]
    fn minus_terminates_a_number() {
        assert_eq!(texts("3-2"), vec!["3", "-2"]);
        assert_eq!(texts("1.5-x"), vec!["1.5", "-", "x"]);
    }

    #[test]
    fn number_keeps_every_dot() {
        assert_eq!(texts("1.2.3"), vec!["1.2.3"]);
        assert_eq!(kinds("."), vec![TokenKind::Number]);
    }

    #[test]
    fn lone_x_is_the_variable() {
        assert_eq!(kinds("x"), vec![TokenKind::Variable]);
        assert_eq!(kinds("xx"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("sin x"), vec![TokenKind::Identifier, TokenKind::Variable]);
        assert_eq!(texts("sinx"), vec!["sinx"]);
    }

    #[test]
    fn identifiers_stop_at_digits_and_operators() {
        assert_eq!(texts("sin2"), vec!["sin", "2"]);
        assert_eq!(texts("x2"), vec!["x", "2"]);
        assert_eq!(texts("foo(x)"), vec!["foo", "(", "x", ")"]);
        assert_eq!(kinds("x2"), vec![TokenKind::Variable, TokenKind::Number]);
    }

    #[test]
    fn unknown_characters_become_identifiers() {
        assert_eq!(kinds("$ #"), vec![TokenKind::Identifier, TokenKind::Identifier]);
        assert_eq!(texts("π*x"), vec!["π", "*", "x"]);
    }

    #[test]
    fn records_byte_offsets() {
        let tokens = tokenize(" π + x");
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![1, 4, 6]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
        assert_eq!(texts("4\u{00A0}5"), vec!["4", "5"]);
    }

    quickcheck! {
        fn tokens_cover_all_visible_characters(input: String) -> bool {
            let joined: String = tokenize(&input).into_iter().map(|t| t.text).collect();
            let visible: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            joined == visible
        }
    }
}
