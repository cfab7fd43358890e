//! Portfolio view
//!
//! Shows one profile section at a time with a project category filter. The
//! developer view adds the simulated server log beside the page.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::status_footer::{render_footer, render_status_line};
use super::app::{build_view_layout, App, TuiApp, ViewExit};
use super::ui::{render_help_modal, styled_page_line};
use crate::presentation::{
    footer_text, logo_icon, logo_text, section_lines, CategoryFilter, PageLine, Section,
};
use crate::profile::{PortfolioProfile, ProfileType};
use crate::route::Route;
use crate::server_log::{ServerLog, ServerLogSettings};
use crate::theme::Theme;

const DEVELOPER_KEYS: &[(&str, &str)] = &[
    ("Tab", "section"),
    ("←/→", "category"),
    ("↑/↓", "scroll"),
    ("l", "log"),
    ("Esc", "terminal"),
    ("q", "quit"),
];

const QA_KEYS: &[(&str, &str)] = &[
    ("Tab", "section"),
    ("←/→", "category"),
    ("↑/↓", "scroll"),
    ("Esc", "terminal"),
    ("q", "quit"),
];

const HELP_KEYS: &[(&str, &str)] = &[
    ("Tab/S-Tab", "Next or previous section"),
    ("1-5", "Jump to section"),
    ("←/→", "Change project category"),
    ("↑/↓ j/k", "Scroll"),
    ("PgUp/PgDn", "Scroll a page"),
    ("l", "Toggle server log (developer)"),
    ("Esc", "Back to the terminal"),
    ("q", "Quit"),
    ("?", "Toggle this help"),
];

/// State of a portfolio page, independent of the terminal.
#[derive(Debug)]
pub struct PortfolioView {
    route: Route,
    profile_type: ProfileType,
    profile: PortfolioProfile,
    theme: Theme,
    section: Section,
    filter: CategoryFilter,
    scroll: u16,
    help: bool,
    server_log: Option<ServerLog>,
    show_log: bool,
    today: NaiveDate,
    exit: Option<ViewExit>,
}

impl PortfolioView {
    /// Build the page for a portfolio route. The server log only runs on the
    /// developer view.
    pub fn new(
        route: Route,
        profile: PortfolioProfile,
        log: Option<ServerLogSettings>,
        today: NaiveDate,
    ) -> Result<Self> {
        let Some(profile_type) = route.profile_type() else {
            bail!("{} is not a portfolio view", route);
        };
        let server_log = match profile_type {
            ProfileType::Developer => log.map(|settings| ServerLog::new(&profile, settings)),
            ProfileType::Qa => None,
        };
        Ok(Self {
            route,
            profile_type,
            filter: CategoryFilter::for_profile(&profile),
            theme: Theme::for_profile_type(profile_type),
            show_log: server_log.is_some(),
            server_log,
            profile,
            section: Section::Hero,
            scroll: 0,
            help: false,
            today,
            exit: None,
        })
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn profile(&self) -> &PortfolioProfile {
        &self.profile
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn log_visible(&self) -> bool {
        self.show_log && self.server_log.is_some()
    }

    pub fn server_log(&self) -> Option<&ServerLog> {
        self.server_log.as_ref()
    }

    pub fn exit(&self) -> Option<ViewExit> {
        self.exit
    }

    /// Play the server log up to `now`.
    pub fn advance(&mut self, now: Duration) {
        if let Some(log) = self.server_log.as_mut() {
            log.advance(now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.leave(ViewExit::Quit);
            return;
        }
        if self.help {
            self.help = false;
            return;
        }

        match key.code {
            // === Leaving ===
            KeyCode::Char('q') => self.leave(ViewExit::Quit),
            KeyCode::Esc => self.leave(ViewExit::Navigate(Route::Terminal)),

            // === Sections ===
            KeyCode::Tab => self.show_section(self.section.next()),
            KeyCode::BackTab => self.show_section(self.section.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                if let Some(section) = Section::ALL.get(idx) {
                    self.show_section(*section);
                }
            }

            // === Projects filter ===
            KeyCode::Right if self.section == Section::Projects => {
                self.filter.next();
                self.scroll = 0;
            }
            KeyCode::Left if self.section == Section::Projects => {
                self.filter.prev();
                self.scroll = 0;
            }

            // === Scrolling ===
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,

            // === Panels ===
            KeyCode::Char('l') if self.server_log.is_some() => self.show_log = !self.show_log,
            KeyCode::Char('?') => self.help = true,
            _ => {}
        }
    }

    fn show_section(&mut self, section: Section) {
        self.section = section;
        self.scroll = 0;
    }

    fn leave(&mut self, exit: ViewExit) {
        if let Some(log) = self.server_log.as_mut() {
            log.stop();
        }
        tracing::debug!(route = %self.route, ?exit, "Leaving portfolio view");
        self.exit = Some(exit);
    }

    /// Content of the current section, with the footer under the last one.
    pub fn body_lines(&self) -> Vec<PageLine> {
        let mut lines = section_lines(&self.profile, self.section, &self.filter, self.today);
        if self.section == Section::Contact {
            lines.push(PageLine::blank());
            lines.push(PageLine::blank());
            lines.push(PageLine::new(
                crate::presentation::LineKind::Detail,
                footer_text(&self.profile, self.today),
            ));
        }
        lines
    }

    fn status_text(&self) -> String {
        let mut status = format!(
            "{}  {}/{} {}",
            self.route.path(),
            self.section.index() + 1,
            Section::ALL.len(),
            self.section.title()
        );
        if self.section == Section::Projects {
            status.push_str(&format!("  Category: {}", self.filter.selected()));
        }
        status
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.profile_type {
            ProfileType::Developer if self.server_log.is_some() => DEVELOPER_KEYS,
            _ => QA_KEYS,
        }
    }
}

/// Render the portfolio view into `area`.
pub fn render_portfolio(frame: &mut Frame, area: Rect, view: &PortfolioView) {
    let theme = &view.theme;
    let chunks = build_view_layout(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(chunks[0]);

    frame.render_widget(Paragraph::new(header_lines(view)), rows[0]);

    let (page_area, log_area) = if view.log_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);
        (columns[0], Some(columns[1]))
    } else {
        (rows[1], None)
    };

    let page: Vec<Line> = view
        .body_lines()
        .iter()
        .map(|line| styled_page_line(line, theme))
        .collect();
    let page = Paragraph::new(page)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(format!(" {} ", view.section.title())),
        )
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));
    frame.render_widget(page, page_area);

    if let (Some(area), Some(log)) = (log_area, view.server_log.as_ref()) {
        let height = area.height.saturating_sub(2) as usize;
        let skip = log.lines().len().saturating_sub(height);
        let lines: Vec<Line> = log
            .lines()
            .iter()
            .skip(skip)
            .map(|l| Line::styled(l.as_str(), theme.text_secondary_style()))
            .collect();
        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(" server.log "),
        );
        frame.render_widget(panel, area);
    }

    render_status_line(frame, chunks[1], &view.status_text(), theme);
    render_footer(frame, chunks[2], view.key_hints(), theme);

    if view.help {
        render_help_modal(frame, area, HELP_KEYS, theme);
    }
}

fn header_lines(view: &PortfolioView) -> Vec<Line<'static>> {
    let theme = &view.theme;
    let logo = Line::from(vec![
        Span::raw(format!("{} ", logo_icon(view.profile_type))),
        Span::styled(
            logo_text(&view.profile, view.profile_type),
            theme.accent_bold_style(),
        ),
    ]);

    let mut tabs = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled("  ", theme.text_secondary_style()));
        }
        let style = if *section == view.section {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        };
        tabs.push(Span::styled(section.title().to_string(), style));
    }
    vec![logo, Line::from(tabs)]
}

/// Full-screen portfolio page.
pub struct PortfolioApp<'a> {
    app: &'a mut App,
    view: PortfolioView,
    started: Instant,
}

impl<'a> PortfolioApp<'a> {
    pub fn new(app: &'a mut App, view: PortfolioView) -> Self {
        Self {
            app,
            view,
            started: Instant::now(),
        }
    }
}

impl TuiApp for PortfolioApp<'_> {
    fn app(&mut self) -> &mut App {
        self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.view.handle_key(key);
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        self.view.advance(self.started.elapsed());
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let view = &self.view;
        self.app.draw(|frame| {
            let area = frame.area();
            render_portfolio(frame, area, view)
        })
    }

    fn exit(&self) -> Option<ViewExit> {
        self.view.exit()
    }
}
