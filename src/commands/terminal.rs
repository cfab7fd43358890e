//! Landing terminal: full-screen views or plain line mode

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use folio::presentation::render_page;
use folio::terminal::{FieldEvent, FieldInput, OutputCursor, SessionSettings, TerminalSession, TextInput};
use folio::tui::{App, PortfolioApp, PortfolioView, TerminalApp, TuiApp, ViewExit};
use folio::{Config, ProfileStore, Route};

use super::today;

/// Longest wait for input between frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run the full-screen views starting at `start` until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_interactive(
    config: &Config,
    mut store: ProfileStore,
    mut settings: SessionSettings,
    start: Route,
) -> Result<()> {
    let mut app = App::new(FRAME_INTERVAL).context("Failed to set up the terminal")?;
    let mut route = start;

    loop {
        app.clear()?;
        let exit = match route {
            Route::Terminal => {
                if let Err(e) = route.enter(&mut store) {
                    tracing::warn!(error = %e, "Could not clear the active profile");
                }
                let visit = settings.clone();
                // Autotype plays on the first visit only
                settings.autotype = None;
                TerminalApp::new(&mut app, &mut store, visit).run()?
            }
            _ => {
                let Some(profile) = route.open_page(&mut store) else {
                    route = Route::Terminal;
                    continue;
                };
                let log = config
                    .server_log
                    .enabled
                    .then(|| config.server_log.settings());
                let view = PortfolioView::new(route, profile, log, today())?;
                PortfolioApp::new(&mut app, view).run()?
            }
        };

        match exit {
            ViewExit::Quit => return Ok(()),
            ViewExit::Navigate(next) => {
                tracing::info!(from = %route, to = %next, "Switching view");
                route = next;
            }
        }
    }
}

/// Line mode: each stdin line is a full field value followed by submit.
///
/// Timed steps run instantly. On navigation the route and page are printed
/// and the function returns.
pub fn run_plain<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    store: &mut ProfileStore,
    settings: SessionSettings,
    start: Route,
) -> Result<()> {
    if start != Route::Terminal {
        return print_page(out, start, store);
    }
    if let Err(e) = start.enter(store) {
        tracing::warn!(error = %e, "Could not clear the active profile");
    }

    let mut session = TerminalSession::new(settings);
    let mut field = FieldInput::new();
    let mut cursor = OutputCursor::default();

    session.settle(store);
    write_lines(out, cursor.drain(session.output()))?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let value = line.trim_end_matches('\r').to_string();
        let caret = value.chars().count();

        for raw in [FieldEvent::Changed { value, caret }, FieldEvent::Submitted] {
            if let Some(event) = field.translate(raw, session.buffer()) {
                session.handle(event);
            }
        }
        session.settle(store);
        write_lines(out, cursor.drain(session.output()))?;

        if let Some(route) = session.take_navigation() {
            return print_page(out, route, store);
        }
    }
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

fn print_page<W: Write>(out: &mut W, route: Route, store: &mut ProfileStore) -> Result<()> {
    let (Some(profile), Some(profile_type)) = (route.open_page(store), route.profile_type()) else {
        writeln!(out, "{}", route.path())?;
        return Ok(());
    };
    writeln!(out, "{}", route.path())?;
    writeln!(out)?;
    write!(out, "{}", render_page(&profile, profile_type, today()))?;
    out.flush()?;
    Ok(())
}

/// Pick the mode and run.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    mut store: ProfileStore,
    plain: bool,
    autotype: Option<String>,
    start: Route,
) -> Result<()> {
    let mut settings = config.terminal.session_settings();
    if autotype.is_some() {
        settings.autotype = autotype;
    }

    if plain || !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_plain(stdin.lock(), &mut out, &mut store, settings, start)
    } else {
        run_interactive(config, store, settings, start)
    }
}
