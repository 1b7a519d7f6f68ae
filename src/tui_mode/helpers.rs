use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use rustgraph::expression::{tokenize, Function, TokenKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Colours a formula the way the parser will see it. Text between tokens
/// (whitespace) is kept as typed.
pub fn highlight_tokens(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let function_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);
    let unknown_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::UNDERLINED);
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let number_style = Style::default().fg(Color::LightGreen);
    let variable_style = Style::default()
        .fg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut last_end = 0;

    for token in tokenize(expr) {
        if token.offset > last_end {
            spans.push(Span::raw(expr[last_end..token.offset].to_string()));
        }

        let style = match token.kind {
            TokenKind::Identifier if Function::from_name(&token.text).is_some() => function_style,
            TokenKind::Identifier => unknown_style,
            TokenKind::Operator => operator_style,
            TokenKind::Number => number_style,
            TokenKind::Variable => variable_style,
            TokenKind::OpenParen | TokenKind::CloseParen => base_style,
        };
        last_end = token.offset + token.text.len();
        spans.push(Span::styled(token.text, style));
    }

    if last_end < expr.len() {
        spans.push(Span::raw(expr[last_end..].to_string()));
    }

    spans
}

/// Re-spaces a formula token by token: one space between tokens, none inside
/// parentheses or between a function name and its `(`. Tokenizing the result
/// gives the same tokens as the input.
pub fn format_with_spaces(expr: &str) -> String {
    let mut result = String::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokenize(expr) {
        let glued = match (previous, token.kind) {
            (None, _) => true,
            (Some(TokenKind::OpenParen), _) => true,
            (_, TokenKind::CloseParen) => true,
            (Some(TokenKind::Identifier), TokenKind::OpenParen) => true,
            _ => false,
        };
        if !glued {
            result.push(' ');
        }
        result.push_str(&token.text);
        previous = Some(token.kind);
    }

    result
}

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            let mut remaining = word;
            while !remaining.is_empty() {
                let mut chunk = String::new();
                let mut chunk_width = 0;
                let mut chunk_byte_len = 0;

                for c in remaining.chars() {
                    let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                    if chunk_width + char_width > width && !chunk.is_empty() {
                        break;
                    }
                    chunk.push(c);
                    chunk_width += char_width;
                    chunk_byte_len += c.len_utf8();
                }

                if !current_line.is_empty() {
                    lines.push(current_line.trim().to_string());
                    current_line.clear();
                    current_width = 0;
                }

                lines.push(chunk);
                remaining = &remaining[chunk_byte_len..];
            }
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(current_line.trim().to_string());
            current_line.clear();
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line.trim().to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn contents(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn keeps_the_text_intact() {
        let spans = highlight_tokens(" sin(x) +  2 ", Style::default());
        let joined: String = contents(&spans).concat();
        assert_eq!(joined, " sin(x) +  2 ");
    }

    #[test]
    fn styles_follow_token_kinds() {
        let spans = highlight_tokens("foo x", Style::default());
        assert_eq!(contents(&spans), vec!["foo", " ", "x"]);
        assert_eq!(spans[0].style.fg, Some(Color::Red));
        assert_eq!(spans[2].style.fg, Some(Color::LightMagenta));

        let spans = highlight_tokens("cos", Style::default());
        assert_eq!(spans[0].style.fg, Some(Color::LightBlue));
    }

    #[test]
    fn spacing() {
        assert_eq!(format_with_spaces("sin(3*x+4)+x^-5"), "sin(3 * x + 4) + x ^ -5");
        assert_eq!(format_with_spaces("  (  x  )  "), "(x)");
        assert_eq!(format_with_spaces("4 5"), "4 5");
        assert_eq!(format_with_spaces("sin x"), "sin x");
        assert_eq!(format_with_spaces(""), "");
    }

    #[test]
    fn wrapping() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("anything", 0), vec![""]);
    }

    quickcheck! {
        fn spacing_keeps_tokens(input: String) -> bool {
            let strip = |s: &str| -> Vec<(TokenKind, String)> {
                tokenize(s).into_iter().map(|t| (t.kind, t.text)).collect()
            };
            strip(&format_with_spaces(&input)) == strip(&input)
        }
    }
}
