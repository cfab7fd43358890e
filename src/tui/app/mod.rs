//! Terminal handle and the event loop shared by every view
//!
//! `App` owns the ratatui terminal: raw mode, alternate screen and bracketed
//! paste are switched on when it is created and restored when it is dropped.
//! Views implement `TuiApp` and get the poll/tick/draw loop for free.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::{Frame, Terminal};

use crate::route::Route;

/// How a view ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewExit {
    /// Leave the program
    Quit,
    /// Switch to another view
    Navigate(Route),
}

/// The terminal, set up for full-screen drawing.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    /// Longest wait for input between ticks.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Clear the screen, used when switching views.
    pub fn clear(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// A full-screen view driven by `run`.
pub trait TuiApp {
    /// The terminal this view draws on.
    fn app(&mut self) -> &mut App;

    /// Handle a key press.
    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    /// Handle pasted text. Ignored unless a view accepts text.
    fn handle_paste(&mut self, _text: String) -> Result<()> {
        Ok(())
    }

    /// Advance timed state to the current instant.
    fn tick(&mut self) -> Result<()> {
        Ok(())
    }

    /// Draw the current state.
    fn draw(&mut self) -> Result<()>;

    /// Set once the view is done.
    fn exit(&self) -> Option<ViewExit>;

    /// Poll input, tick and redraw until the view exits.
    fn run(&mut self) -> Result<ViewExit> {
        loop {
            self.tick()?;
            if let Some(exit) = self.exit() {
                return Ok(exit);
            }
            self.draw()?;

            let timeout = self.app().tick_rate();
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key)?,
                    Event::Paste(text) => self.handle_paste(text)?,
                    // Resize is picked up by the next draw
                    _ => {}
                }
            }
            if let Some(exit) = self.exit() {
                return Ok(exit);
            }
        }
    }
}

/// Split a view into body, status line and footer.
pub fn build_view_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_layout_reserves_two_bottom_rows() {
        let chunks = build_view_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 22);
        assert_eq!(chunks[1].y, 22);
        assert_eq!(chunks[2].y, 23);
    }
}
