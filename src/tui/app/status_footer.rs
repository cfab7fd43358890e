//! Shared status line and footer rendering
//!
//! Each view computes its own mode-aware status text and key hints and
//! renders them through these helpers, so both bars look the same
//! everywhere.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Render a status line in the secondary text color.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let status = Paragraph::new(text.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// `&[("q", "quit"), ("?", "help")]` renders as `q: quit | ?: help`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Styled spans for footer hints: accent keys, secondary descriptions,
/// ` | ` between entries.
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}

/// Render a centered footer from pre-formatted text.
pub fn render_footer_text(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let footer = Paragraph::new(text.to_string())
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_spans_join_with_separator() {
        let theme = Theme::terminal();
        let spans = build_footer_spans(&[("q", "quit"), ("?", "help")], &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "q: quit | ?: help");
        assert_eq!(spans[0].style.fg, Some(theme.accent));
    }

    #[test]
    fn empty_footer_has_no_spans() {
        assert!(build_footer_spans(&[], &Theme::terminal()).is_empty());
    }
}
