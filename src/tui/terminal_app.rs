//! Landing terminal view
//!
//! Draws the session's output and prompt, feeds key presses through the
//! keyboard adapter, and advances the session's clock in real time.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::status_footer::{render_footer_text, render_status_line};
use super::app::{build_view_layout, App, TuiApp, ViewExit};
use crate::profile::ProfileStore;
use crate::terminal::{KeyInput, Mode, SessionSettings, TerminalSession, TextInput};
use crate::theme::{current_theme, Theme};

/// Prompt drawn before the command buffer.
pub const PROMPT: &str = "$ ";

/// Interactive landing terminal.
pub struct TerminalApp<'a> {
    app: &'a mut App,
    store: &'a mut ProfileStore,
    session: TerminalSession,
    input: KeyInput,
    started: Instant,
    exit: Option<ViewExit>,
}

impl<'a> TerminalApp<'a> {
    pub fn new(app: &'a mut App, store: &'a mut ProfileStore, settings: SessionSettings) -> Self {
        Self {
            app,
            store,
            session: TerminalSession::new(settings),
            input: KeyInput::new(),
            started: Instant::now(),
            exit: None,
        }
    }
}

impl TuiApp for TerminalApp<'_> {
    fn app(&mut self) -> &mut App {
        self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.exit = Some(ViewExit::Quit);
            return Ok(());
        }
        if let Some(event) = KeyInput::key(key) {
            self.session.handle(event);
        }
        Ok(())
    }

    fn handle_paste(&mut self, text: String) -> Result<()> {
        let raw = crossterm::event::Event::Paste(text);
        if let Some(event) = self.input.translate(raw, self.session.buffer()) {
            self.session.handle(event);
        }
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        self.session.advance(self.started.elapsed(), self.store);
        if let Some(route) = self.session.take_navigation() {
            self.exit = Some(ViewExit::Navigate(route));
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        self.app.draw(|frame| {
            let area = frame.area();
            render_terminal(frame, area, session)
        })
    }

    fn exit(&self) -> Option<ViewExit> {
        self.exit
    }
}

/// Render the full terminal view into `area`.
pub fn render_terminal(frame: &mut Frame, area: Rect, session: &TerminalSession) {
    let theme = current_theme();
    let chunks = build_view_layout(area);
    let body = chunks[0];

    let mut lines: Vec<Line> = session
        .output()
        .lines()
        .iter()
        .map(|text| style_output_line(text, &theme))
        .collect();

    let prompt_visible = session.prompt_visible();
    if prompt_visible {
        lines.push(Line::from(vec![
            Span::styled(PROMPT, theme.accent_bold_style()),
            Span::styled(session.buffer().text().to_string(), theme.text_style()),
        ]));
    }

    // Keep the newest lines on screen
    let height = body.height as usize;
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    let last_row = visible.len().saturating_sub(1) as u16;
    frame.render_widget(Paragraph::new(visible), body);

    if prompt_visible && session.mode() == Mode::Idle && body.height > 0 {
        let typed = UnicodeWidthStr::width(session.buffer().before_cursor()) as u16;
        let x = body.x + (PROMPT.len() as u16 + typed).min(body.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, body.y + last_row));
    }

    render_status_line(frame, chunks[1], &compute_status_text(session), &theme);
    render_footer_text(frame, chunks[2], compute_footer_text(session.mode()), &theme);
}

fn style_output_line<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    let style = if text.starts_with("Error") || text.starts_with("Command not found") {
        theme.error_style()
    } else if text.starts_with('✓') || text.starts_with("Portfolio ready") {
        theme.success_style()
    } else if text.starts_with(PROMPT) {
        theme.accent_style()
    } else {
        theme.text_style()
    };
    Line::styled(text, style)
}

/// Status line text for the session's current mode.
pub fn compute_status_text(session: &TerminalSession) -> String {
    if session.is_navigating() {
        return "Navigating...".to_string();
    }
    match session.mode() {
        Mode::Idle if !session.prompt_visible() => "Starting...".to_string(),
        Mode::Idle => "Type 'help' for commands".to_string(),
        Mode::TypingAnimation => "Typing... (Enter or Esc to skip)".to_string(),
        Mode::Loading => "Loading...".to_string(),
        Mode::AwaitingConfirmation => match session.pending_profile_key() {
            Some(key) => format!("{} ready. Press Enter to open", key),
            None => "Press Enter to open".to_string(),
        },
    }
}

/// Footer key hints for `mode`.
pub fn compute_footer_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => "Enter: run | ↑/↓: history | Ctrl+C: reset | Ctrl+D: quit",
        Mode::TypingAnimation => "Enter/Esc: skip | Ctrl+C: reset | Ctrl+D: quit",
        Mode::Loading => "Ctrl+C: reset | Ctrl+D: quit",
        Mode::AwaitingConfirmation => "Enter: open portfolio | Ctrl+C: reset | Ctrl+D: quit",
    }
}
