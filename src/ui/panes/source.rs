//! Expression pane rendering
//!
//! Shows the input line coloured by token class, followed by the reduction
//! performed in the current step and the final result or error.

use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the expression pane
pub struct SourceRenderData<'a> {
    pub source_code: &'a str,
    pub tokens: &'a [Token],
    /// Description of the current step (e.g. `3 * 4 = 12`)
    pub step_description: Option<&'a str>,
    pub result: Option<i64>,
    pub error: Option<String>,
}

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Integer => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Plus | TokenKind::Minus | TokenKind::Multiply | TokenKind::Divide => {
            Style::default()
                .fg(DEFAULT_THEME.operator)
                .add_modifier(Modifier::BOLD)
        }
        TokenKind::OpenParen | TokenKind::CloseParen => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::Invalid => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
        TokenKind::EndOfFile => Style::default(),
    }
}

/// Number of source characters a token covers
fn token_width(token: &Token) -> usize {
    match token.kind {
        TokenKind::Integer => token.text.chars().count(),
        TokenKind::EndOfFile => 0,
        _ => 1,
    }
}

/// Colour the source line using the token stream. Characters between tokens
/// (whitespace) are emitted unstyled.
fn highlight_expression<'a>(source: &str, tokens: &[Token]) -> Line<'a> {
    let chars: Vec<char> = source.chars().collect();
    let mut spans = Vec::new();
    let mut pos = 0;

    for token in tokens {
        let start = token.location.column.saturating_sub(1).min(chars.len());
        let end = (start + token_width(token)).min(chars.len());
        if start > pos {
            spans.push(Span::raw(chars[pos..start].iter().collect::<String>()));
        }
        if end > start {
            spans.push(Span::styled(
                chars[start..end].iter().collect::<String>(),
                token_style(token.kind),
            ));
        }
        pos = pos.max(end);
    }

    if pos < chars.len() {
        spans.push(Span::raw(chars[pos..].iter().collect::<String>()));
    }

    Line::from(spans)
}

/// Render the expression pane
pub fn render_source_pane(frame: &mut Frame, area: Rect, data: SourceRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = vec![
        highlight_expression(data.source_code, data.tokens),
        Line::from(""),
    ];

    lines.push(Line::from(vec![
        Span::styled("Step:   ", label_style),
        Span::styled(
            data.step_description.unwrap_or("-").to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]));

    let outcome = match (&data.error, data.result) {
        (Some(message), _) => Span::styled(
            message.clone(),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
        (None, Some(value)) => Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        (None, None) => Span::styled("-", label_style),
    };
    lines.push(Line::from(vec![Span::styled("Result: ", label_style), outcome]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn span_texts(source: &str) -> Vec<String> {
        let tokens = Lexer::new(source).tokenize();
        highlight_expression(source, &tokens)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let source = " 12 +(3)  ";
        assert_eq!(span_texts(source).concat(), source);
    }

    #[test]
    fn test_highlight_splits_tokens() {
        assert_eq!(span_texts("12*3"), vec!["12", "*", "3"]);
        assert_eq!(span_texts("1 $"), vec!["1", " ", "$"]);
    }
}
