use super::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" RustGraph Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "RustGraph - sample a formula in x",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Formulas:"),
        Line::from("  x             : the variable"),
        Line::from("  2.5, -3, .5   : numbers; a '-' touching a digit is a sign"),
        Line::from("  + - * / ^     : operators, loosest to tightest"),
        Line::from("  ( )           : grouping"),
        Line::from("  The leftmost operator of a kind splits first: 2 - 3 - 4 = 2 - (3 - 4) = 3"),
        Line::from("  Put spaces around a binary minus: x - 1, not x-1"),
        Line::from(""),
        heading("Functions (one argument, radians):"),
        Line::from("  sin cos tan     : sine, cosine, tangent"),
        Line::from("  sec csc cot     : 1/cos, 1/sin, 1/tan"),
        Line::from("  asin acos atan  : inverse trigonometric"),
        Line::from("  log exp         : natural logarithm, e^x"),
        Line::from("  Write sin(x) or sin x; sinx is an unknown name"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  range MIN MAX  : set the x range"),
        Line::from("  width N        : sample N + 1 points"),
        Line::from("  tree FORMULA   : show how a formula is grouped"),
        Line::from("  clear          : forget all formulas"),
        Line::from("  help           : show this screen"),
        Line::from("  quit           : exit"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Recall earlier formulas"),
        Line::from("  PgUp/PgDn, mouse wheel : Scroll the samples"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Esc : Close this help"),
        Line::from(""),
        heading("Examples:"),
        Line::from("  sin(3 * x + 4) + x ^ -5"),
        Line::from("  exp(-1 * x ^ 2)"),
        Line::from("  1 / (x ^ 2 + 1)"),
        Line::from("  tree 2 - 3 - 4"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
