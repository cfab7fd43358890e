//! UI rendering helpers for TUI
//!
//! Layout and styling helpers shared by the views.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::presentation::{LineKind, PageLine};
use crate::theme::Theme;

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Style a page line by its kind.
pub fn styled_page_line(line: &PageLine, theme: &Theme) -> Line<'static> {
    let style = match line.kind {
        LineKind::Heading => theme.accent_bold_style(),
        LineKind::Title => theme.text_style().add_modifier(Modifier::BOLD),
        LineKind::Body => theme.text_style(),
        LineKind::Detail => theme.text_secondary_style(),
        LineKind::Blank => Style::default(),
    };
    Line::styled(line.text.clone(), style)
}

/// Render a bordered help overlay listing `(key, description)` pairs.
pub fn render_help_modal(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let modal_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, modal_area);

    let mut lines = vec![Line::from(Span::styled("Keys", theme.accent_bold_style())), Line::default()];
    for (key, description) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_style()),
            Span::styled(description.to_string(), theme.text_style()),
        ]));
    }

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}
