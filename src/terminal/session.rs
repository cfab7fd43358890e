//! Terminal session state machine
//!
//! One `TerminalSession` per visit to the landing view. All pacing (banner,
//! typing animation, dispatch, loading, navigation) goes through a single
//! [`Scheduler`], so resetting the session is one `cancel_all`.
//!
//! Modes:
//! - `Idle`: editing the prompt
//! - `TypingAnimation`: a scripted command is being typed; Enter/Esc skip
//! - `Loading`: artificial fetch delay; only Ctrl+C is accepted
//! - `AwaitingConfirmation`: summary shown; Enter navigates
//!
//! Ctrl+C resets from any mode and replays the banner. History survives.

use std::time::Duration;

use super::{Command, CommandBuffer, History, InputEvent, Output};
use crate::profile::{infer_type, short_key, ProfileStore, DEFAULT_PROFILE_KEY};
use crate::route::Route;
use crate::scheduler::Scheduler;

/// Lines printed when a session starts. The prompt appears after the last.
pub const BANNER: [&str; 4] = [
    "Welcome to Portfolio Terminal v2.0",
    "Initializing system...",
    "Loading portfolio information...",
    "",
];

/// Interaction mode of the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    TypingAnimation,
    Loading,
    AwaitingConfirmation,
}

/// A timed step queued on the session scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print banner line `n`
    Banner(usize),
    /// Type the next character of the scripted command
    TypeChar,
    /// Execute a submitted command
    Dispatch(String),
    /// End the loading delay for a profile key
    FinishLoading(String),
    /// Hand off to a portfolio view
    Navigate(Route),
}

/// Delays between timed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Between typed characters in the animation
    pub typing: Duration,
    /// From submit to execution
    pub dispatch: Duration,
    /// From the end of the animation to execution
    pub autotype_dispatch: Duration,
    /// Artificial fetch delay
    pub loading: Duration,
    /// From confirmation to navigation
    pub navigate: Duration,
    /// Between banner lines
    pub banner_line: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(50),
            dispatch: Duration::from_millis(50),
            autotype_dispatch: Duration::from_millis(300),
            loading: Duration::from_millis(800),
            navigate: Duration::from_millis(500),
            banner_line: Duration::from_millis(200),
        }
    }
}

/// Construction parameters for a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub timings: Timings,
    pub history_limit: usize,
    /// Command typed automatically once the banner finishes
    pub autotype: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            history_limit: super::history::DEFAULT_HISTORY_LIMIT,
            autotype: None,
        }
    }
}

#[derive(Debug, Clone)]
struct TypingScript {
    command: String,
    typed: usize,
}

/// Transient state of one terminal visit.
#[derive(Debug)]
pub struct TerminalSession {
    buffer: CommandBuffer,
    history: History,
    output: Output,
    mode: Mode,
    pending_profile_key: Option<String>,
    prompt_visible: bool,
    navigating: bool,
    navigation: Option<Route>,
    /// A submitted command is waiting for its `Dispatch` step
    dispatch_pending: bool,
    typing: Option<TypingScript>,
    autotype: Option<String>,
    scheduler: Scheduler<Step>,
    timings: Timings,
}

impl TerminalSession {
    /// Create a session with its banner queued from time zero.
    pub fn new(settings: SessionSettings) -> Self {
        let mut session = Self {
            buffer: CommandBuffer::new(),
            history: History::new(settings.history_limit),
            output: Output::default(),
            mode: Mode::Idle,
            pending_profile_key: None,
            prompt_visible: false,
            navigating: false,
            navigation: None,
            dispatch_pending: false,
            typing: None,
            autotype: settings.autotype.filter(|c| !c.trim().is_empty()),
            scheduler: Scheduler::new(),
            timings: settings.timings,
        };
        session.start_banner();
        session
    }

    // === Accessors ===

    pub fn buffer(&self) -> &CommandBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending_profile_key(&self) -> Option<&str> {
        self.pending_profile_key.as_deref()
    }

    /// Whether the `$ ` prompt line should be drawn.
    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible && self.mode != Mode::Loading && !self.navigating
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// Virtual time of the last executed step or clock advance.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Due time of the next queued step.
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Route chosen by a completed navigation, handed out once.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.navigation.take()
    }

    // === Clock ===

    /// Run every step due at `now`, in order.
    pub fn advance(&mut self, now: Duration, store: &mut ProfileStore) {
        while let Some(step) = self.scheduler.pop_due(now) {
            self.run(step, store);
        }
        self.scheduler.advance_to(now);
    }

    /// Run queued steps until none remain, jumping the clock between them.
    pub fn settle(&mut self, store: &mut ProfileStore) {
        while let Some(due) = self.scheduler.next_due() {
            self.advance(due, store);
        }
    }

    // === Input ===

    /// Apply one input event.
    pub fn handle(&mut self, event: InputEvent) {
        if event == InputEvent::Interrupt {
            self.restart();
            return;
        }
        if self.navigating {
            return;
        }

        match self.mode {
            Mode::Idle => self.edit(event),
            Mode::TypingAnimation => {
                if matches!(event, InputEvent::Submit | InputEvent::Skip) {
                    self.finish_typing();
                }
            }
            Mode::AwaitingConfirmation => {
                if event == InputEvent::Submit {
                    self.confirm();
                }
            }
            Mode::Loading => {}
        }
    }

    /// Play `command` one character at a time, then run it.
    pub fn type_command(&mut self, command: &str) {
        self.scheduler.cancel_all();
        self.dispatch_pending = false;
        self.buffer.clear();
        self.history.cancel_browse();
        self.mode = Mode::TypingAnimation;
        self.typing = Some(TypingScript {
            command: command.to_string(),
            typed: 0,
        });
        self.scheduler.schedule(Duration::ZERO, Step::TypeChar);
    }

    fn edit(&mut self, event: InputEvent) {
        match event {
            InputEvent::Insert(c) => {
                self.history.cancel_browse();
                self.buffer.insert(c);
            }
            InputEvent::Backspace => {
                self.history.cancel_browse();
                self.buffer.backspace();
            }
            InputEvent::Delete => {
                self.history.cancel_browse();
                self.buffer.delete();
            }
            InputEvent::Left => self.buffer.move_left(),
            InputEvent::Right => self.buffer.move_right(),
            InputEvent::Up => {
                if let Some(entry) = self.history.up(self.buffer.text()) {
                    self.buffer.set(entry);
                }
            }
            InputEvent::Down => {
                if let Some(entry) = self.history.down() {
                    self.buffer.set(&entry);
                }
            }
            InputEvent::Submit => self.submit(),
            InputEvent::Paste(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    self.history.cancel_browse();
                    self.buffer.insert_str(text);
                }
            }
            InputEvent::Replace { value, caret } => {
                self.history.cancel_browse();
                self.buffer.replace(&value, caret);
            }
            InputEvent::Skip | InputEvent::Interrupt => {}
        }
    }

    fn submit(&mut self) {
        let command = self.buffer.text().trim().to_string();
        if command.is_empty() || self.dispatch_pending {
            return;
        }
        self.commit(&command);
        self.dispatch_pending = true;
        self.scheduler
            .schedule(self.timings.dispatch, Step::Dispatch(command));
    }

    /// Echo a command, record it, and empty the prompt.
    fn commit(&mut self, command: &str) {
        self.output.push(format!("$ {}", command));
        self.history.push(command);
        self.buffer.clear();
    }

    fn confirm(&mut self) {
        let key = self
            .pending_profile_key
            .as_deref()
            .unwrap_or(DEFAULT_PROFILE_KEY);
        let route = Route::for_key(key);

        self.output.push("Navigating to portfolio page...");
        self.navigating = true;
        self.scheduler
            .schedule(self.timings.navigate, Step::Navigate(route));
        tracing::debug!(key, route = %route, "Navigation confirmed");
    }

    /// Full reset: drop queued steps, clear everything but history, replay
    /// the banner.
    fn restart(&mut self) {
        let dropped = self.scheduler.cancel_all();
        tracing::debug!(dropped, mode = ?self.mode, "Session reset");

        self.buffer.clear();
        self.history.cancel_browse();
        self.output.clear();
        self.mode = Mode::Idle;
        self.pending_profile_key = None;
        self.navigating = false;
        self.navigation = None;
        self.dispatch_pending = false;
        self.typing = None;
        self.start_banner();
    }

    fn start_banner(&mut self) {
        self.prompt_visible = false;
        for (i, _) in BANNER.iter().enumerate() {
            self.scheduler
                .schedule(self.timings.banner_line * i as u32, Step::Banner(i));
        }
    }

    // === Steps ===

    fn run(&mut self, step: Step, store: &mut ProfileStore) {
        match step {
            Step::Banner(i) => self.banner_line(i),
            Step::TypeChar => self.type_next(),
            Step::Dispatch(command) => {
                self.dispatch_pending = false;
                self.dispatch(&command, store);
            }
            Step::FinishLoading(key) => self.finish_loading(key, store),
            Step::Navigate(route) => {
                tracing::info!(route = %route, "Navigating");
                self.navigation = Some(route);
            }
        }
    }

    fn banner_line(&mut self, i: usize) {
        let Some(line) = BANNER.get(i) else {
            return;
        };
        self.output.push(*line);

        if i + 1 == BANNER.len() {
            self.prompt_visible = true;
            if let Some(command) = self.autotype.take() {
                self.type_command(&command);
            }
        }
    }

    fn type_next(&mut self) {
        if let Some(script) = self.typing.as_mut() {
            if let Some(c) = script.command.chars().nth(script.typed) {
                script.typed += 1;
                self.buffer.insert(c);
                self.scheduler.schedule(self.timings.typing, Step::TypeChar);
                return;
            }
        }
        self.finish_typing();
    }

    fn finish_typing(&mut self) {
        let Some(script) = self.typing.take() else {
            return;
        };
        self.scheduler.cancel_all();
        self.mode = Mode::Idle;

        let command = script.command.trim().to_string();
        if command.is_empty() {
            self.buffer.clear();
            return;
        }
        self.commit(&command);
        self.dispatch_pending = true;
        self.scheduler
            .schedule(self.timings.autotype_dispatch, Step::Dispatch(command));
    }

    fn dispatch(&mut self, input: &str, store: &mut ProfileStore) {
        let command = Command::parse(input);
        tracing::debug!(?command, "Dispatching");
        let profile_key = command.profile_key();

        match command {
            Command::LoadProfile {
                ref name,
                profile_type,
            } => {
                let key = profile_key.unwrap_or_default();
                if !store.has_profile(&key) {
                    self.output
                        .push(format!("Error: Portfolio not found for {}", key));
                    self.output.push(format!(
                        "Available profiles: {}",
                        store.short_keys().join(", ")
                    ));
                    self.output.push("");
                    return;
                }
                let message = format!("Loading {} portfolio for {}...", profile_type, name);
                self.begin_loading(message, key);
            }
            Command::FetchPortfolio => {
                self.begin_loading(
                    "Fetching portfolio data from server...".to_string(),
                    DEFAULT_PROFILE_KEY.to_string(),
                );
            }
            Command::Help => self.print_help(store),
            Command::Clear => {
                self.output.clear();
                self.buffer.clear();
                self.mode = Mode::Idle;
            }
            Command::Exit => self.restart(),
            Command::Unknown(input) => {
                self.output.push(format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    input
                ));
                self.output.push("");
            }
        }
    }

    fn begin_loading(&mut self, message: String, key: String) {
        self.output.push(message);
        self.mode = Mode::Loading;
        self.scheduler
            .schedule(self.timings.loading, Step::FinishLoading(key));
    }

    fn finish_loading(&mut self, key: String, store: &mut ProfileStore) {
        let profile = store.active_profile(Some(&key), Some(infer_type(&key)));
        if let Err(e) = store.set_active(&key, Some(&profile)) {
            tracing::warn!(key = %key, error = %e, "Failed to persist active profile");
        }

        self.output.push("✓ Portfolio data loaded successfully");
        self.output.push(format!("  Name: {}", profile.name));
        self.output.push(format!("  Title: {}", profile.title));
        self.output
            .push(format!("  Projects: {}", profile.portfolio_items.len()));
        self.output.push(format!(
            "  Experience: {} positions",
            profile.work_experience.len()
        ));
        self.output
            .push(format!("  Social Links: {}", profile.social_links.len()));
        self.output.push("");
        self.output.push("Portfolio ready! Press Enter to navigate...");

        self.mode = Mode::AwaitingConfirmation;
        self.pending_profile_key = Some(key);
    }

    fn print_help(&mut self, store: &ProfileStore) {
        self.output.push("Available commands:");
        self.output.push(help_line("fetch-portfolio", "Load default portfolio data"));
        for id in store.list_profiles() {
            let description = format!("Load {} {} portfolio", id.name, id.profile_type);
            self.output.push(help_line(&short_key(&id.key), &description));
        }
        self.output.push(help_line("help", "Show this help message"));
        self.output.push(help_line("clear", "Clear terminal"));
        self.output.push(help_line("exit", "Exit terminal"));
        self.output.push("");
    }
}

fn help_line(command: &str, description: &str) -> String {
    format!("  {:<28} - {}", command, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileRegistry;
    use crate::storage::MemoryStore;
    use crate::terminal::{FieldEvent, FieldInput, TextInput};

    fn store() -> ProfileStore {
        ProfileStore::new(
            ProfileRegistry::builtin().unwrap(),
            Box::new(MemoryStore::new()),
        )
        .unwrap()
    }

    /// A session with its banner already printed.
    fn ready(store: &mut ProfileStore) -> TerminalSession {
        let mut session = TerminalSession::new(SessionSettings::default());
        session.settle(store);
        session
    }

    fn type_text(session: &mut TerminalSession, text: &str) {
        for c in text.chars() {
            session.handle(InputEvent::Insert(c));
        }
    }

    fn run(session: &mut TerminalSession, store: &mut ProfileStore, command: &str) {
        type_text(session, command);
        session.handle(InputEvent::Submit);
        session.settle(store);
    }

    fn lines(session: &TerminalSession) -> Vec<String> {
        session.output().lines().to_vec()
    }

    #[test]
    fn banner_prints_then_shows_prompt() {
        let mut store = store();
        let mut session = TerminalSession::new(SessionSettings::default());
        assert!(!session.prompt_visible());

        session.advance(Duration::from_millis(200), &mut store);
        assert_eq!(lines(&session), BANNER[..2]);
        assert!(!session.prompt_visible());

        session.advance(Duration::from_millis(600), &mut store);
        assert_eq!(lines(&session), BANNER);
        assert!(session.prompt_visible());
    }

    #[test]
    fn mona_qa_end_to_end() {
        let mut store = store();
        let mut session = ready(&mut store);

        type_text(&mut session, "mona-qa");
        session.handle(InputEvent::Submit);
        assert!(session.buffer().is_empty());

        let t = session.now() + Timings::default().dispatch;
        session.advance(t, &mut store);
        assert_eq!(session.mode(), Mode::Loading);
        assert!(!session.prompt_visible());
        assert!(lines(&session).contains(&"Loading qa portfolio for mona...".to_string()));

        session.settle(&mut store);
        assert_eq!(session.mode(), Mode::AwaitingConfirmation);
        assert_eq!(session.pending_profile_key(), Some("mona-qa"));
        assert!(lines(&session).contains(&"  Name: Monalisha Biswal".to_string()));

        session.handle(InputEvent::Submit);
        assert!(session.is_navigating());
        assert_eq!(session.take_navigation(), None);

        session.settle(&mut store);
        assert_eq!(session.take_navigation(), Some(Route::QaPortfolio));
        assert_eq!(store.active_key(), "mona-qa");
    }

    #[test]
    fn dev_shorthand_and_full_type_give_same_summary() {
        let summary = |command: &str| {
            let mut store = store();
            let mut session = ready(&mut store);
            run(&mut session, &mut store, command);
            let out = lines(&session);
            let start = out
                .iter()
                .position(|l| l.starts_with("✓"))
                .unwrap();
            (out[start..].to_vec(), store.active_key())
        };

        let (short, short_active) = summary("sujit-dev");
        let (long, long_active) = summary("sujit-developer");
        assert_eq!(short, long);
        assert_eq!(short_active, "sujit-developer");
        assert_eq!(long_active, "sujit-developer");
        assert!(short.contains(&"  Projects: 8".to_string()));
        assert!(short.contains(&"  Experience: 2 positions".to_string()));
    }

    #[test]
    fn unknown_profile_reports_and_returns_to_idle() {
        let mut store = store();
        let mut session = ready(&mut store);
        let before = session.output().len();

        run(&mut session, &mut store, "ghost-developer");

        let out = &session.output().lines()[before..];
        assert_eq!(
            out,
            [
                "$ ghost-developer",
                "Error: Portfolio not found for ghost-developer",
                "Available profiles: sujit-dev, mona-qa",
                "",
            ]
        );
        assert!(session.buffer().is_empty());
        assert_eq!(session.mode(), Mode::Idle);
        assert!(session.prompt_visible());
    }

    #[test]
    fn unknown_command_hints_at_help() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "ls");
        assert!(lines(&session)
            .contains(&"Command not found: ls. Type 'help' for available commands.".to_string()));
    }

    #[test]
    fn history_dedupes_and_restores_draft() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "a");
        run(&mut session, &mut store, "b");
        run(&mut session, &mut store, "a");
        assert_eq!(session.history().entries(), ["b", "a"]);

        type_text(&mut session, "dr");
        session.handle(InputEvent::Up);
        assert_eq!(session.buffer().text(), "a");
        session.handle(InputEvent::Up);
        assert_eq!(session.buffer().text(), "b");
        assert_eq!(session.buffer().cursor(), 1);
        session.handle(InputEvent::Down);
        session.handle(InputEvent::Down);
        assert_eq!(session.buffer().text(), "dr");
    }

    #[test]
    fn typing_cancels_history_browse() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "help");

        session.handle(InputEvent::Up);
        session.handle(InputEvent::Insert('!'));
        session.handle(InputEvent::Down);
        assert_eq!(session.buffer().text(), "help!");
    }

    #[test]
    fn ctrl_c_during_confirmation_aborts_to_idle() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "mona-qa");
        assert_eq!(session.mode(), Mode::AwaitingConfirmation);

        session.handle(InputEvent::Interrupt);
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.pending_profile_key(), None);
        assert_eq!(session.history().entries(), ["mona-qa"]);

        session.settle(&mut store);
        run(&mut session, &mut store, "help");
        let out = lines(&session);
        assert!(out.iter().any(|l| l.starts_with("  sujit-dev ")));
        assert!(out.iter().any(|l| l.starts_with("  mona-qa ")));
    }

    #[test]
    fn ctrl_c_drops_pending_steps() {
        let mut store = store();
        let mut session = ready(&mut store);
        type_text(&mut session, "mona-qa");
        session.handle(InputEvent::Submit);
        session.handle(InputEvent::Interrupt);
        session.settle(&mut store);

        assert_eq!(lines(&session), BANNER);
        assert_eq!(store.active_key(), DEFAULT_PROFILE_KEY);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn ctrl_c_during_loading_drops_finish_step() {
        let mut store = store();
        let mut session = ready(&mut store);
        type_text(&mut session, "mona-qa");
        session.handle(InputEvent::Submit);
        let t = session.now() + Timings::default().dispatch;
        session.advance(t, &mut store);
        assert_eq!(session.mode(), Mode::Loading);

        session.handle(InputEvent::Interrupt);
        assert_eq!(session.mode(), Mode::Idle);
        session.settle(&mut store);

        assert_eq!(lines(&session), BANNER);
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.pending_profile_key(), None);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn ctrl_c_during_typing_drops_remaining_characters() {
        let mut store = store();
        let mut session = ready(&mut store);
        session.type_command("mona-qa");
        let start = session.now();
        session.advance(start + Duration::from_millis(100), &mut store);
        assert_eq!(session.buffer().text(), "mon");

        session.handle(InputEvent::Interrupt);
        assert_eq!(session.mode(), Mode::Idle);
        assert!(session.buffer().is_empty());
        session.settle(&mut store);

        assert!(session.buffer().is_empty());
        assert_eq!(lines(&session), BANNER);
        assert!(session.history().entries().is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn submit_while_dispatch_pending_is_ignored() {
        let mut store = store();
        let mut session = ready(&mut store);
        type_text(&mut session, "help");
        session.handle(InputEvent::Submit);
        type_text(&mut session, "help");
        session.handle(InputEvent::Submit);
        assert_eq!(session.buffer().text(), "help");

        let t = session.now() + Timings::default().dispatch;
        session.advance(t, &mut store);
        let count = |s: &TerminalSession| {
            lines(s)
                .iter()
                .filter(|l| l.as_str() == "Available commands:")
                .count()
        };
        assert_eq!(count(&session), 1);

        session.handle(InputEvent::Submit);
        session.settle(&mut store);
        assert_eq!(count(&session), 2);
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn loading_ignores_everything_but_interrupt() {
        let mut store = store();
        let mut session = ready(&mut store);
        type_text(&mut session, "fetch-portfolio");
        session.handle(InputEvent::Submit);
        let t = session.now() + Timings::default().dispatch;
        session.advance(t, &mut store);
        assert_eq!(session.mode(), Mode::Loading);

        session.handle(InputEvent::Insert('x'));
        session.handle(InputEvent::Paste("junk".into()));
        assert!(session.buffer().is_empty());

        session.settle(&mut store);
        assert_eq!(session.pending_profile_key(), Some(DEFAULT_PROFILE_KEY));
    }

    #[test]
    fn confirmation_accepts_only_enter() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "sujit-dev");

        session.handle(InputEvent::Insert('x'));
        session.handle(InputEvent::Paste("more".into()));
        assert!(session.buffer().is_empty());
        assert_eq!(session.mode(), Mode::AwaitingConfirmation);

        session.handle(InputEvent::Submit);
        session.settle(&mut store);
        assert_eq!(session.take_navigation(), Some(Route::DeveloperPortfolio));
    }

    #[test]
    fn paste_inserts_trimmed_text_at_cursor() {
        let mut store = store();
        let mut session = ready(&mut store);
        type_text(&mut session, "mqa");
        session.handle(InputEvent::Left);
        session.handle(InputEvent::Left);
        session.handle(InputEvent::Paste("  ona- \n".into()));
        assert_eq!(session.buffer().text(), "mona-qa");
        assert_eq!(session.buffer().cursor(), 5);
    }

    #[test]
    fn clear_empties_output_but_keeps_history() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "help");
        run(&mut session, &mut store, "clear");

        assert!(session.output().is_empty());
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.history().entries(), ["help", "clear"]);
    }

    #[test]
    fn exit_replays_banner_and_keeps_history() {
        let mut store = store();
        let mut session = ready(&mut store);
        run(&mut session, &mut store, "help");
        run(&mut session, &mut store, "exit");

        assert_eq!(lines(&session), BANNER);
        assert_eq!(session.history().entries(), ["help", "exit"]);
        assert!(session.prompt_visible());
    }

    #[test]
    fn typing_animation_types_then_dispatches() {
        let mut store = store();
        let mut session = ready(&mut store);
        session.type_command("help");
        assert_eq!(session.mode(), Mode::TypingAnimation);

        let start = session.now();
        session.advance(start, &mut store);
        assert_eq!(session.buffer().text(), "h");
        session.advance(start + Duration::from_millis(100), &mut store);
        assert_eq!(session.buffer().text(), "hel");

        // Keys other than skip are ignored while typing
        session.handle(InputEvent::Insert('z'));
        assert_eq!(session.buffer().text(), "hel");

        session.settle(&mut store);
        let out = lines(&session);
        assert!(out.contains(&"$ help".to_string()));
        assert!(out.contains(&"Available commands:".to_string()));
        assert_eq!(session.history().entries(), ["help"]);
    }

    #[test]
    fn skip_finishes_typing_immediately() {
        let mut store = store();
        let mut session = ready(&mut store);
        session.type_command("mona-qa");
        session.advance(session.now(), &mut store);

        session.handle(InputEvent::Skip);
        assert_eq!(session.mode(), Mode::Idle);
        assert!(session.buffer().is_empty());
        assert_eq!(session.output().lines().last().map(String::as_str), Some("$ mona-qa"));

        session.settle(&mut store);
        assert_eq!(session.pending_profile_key(), Some("mona-qa"));
    }

    #[test]
    fn autotype_starts_after_banner() {
        let mut store = store();
        let settings = SessionSettings {
            autotype: Some("sujit-dev".to_string()),
            ..SessionSettings::default()
        };
        let mut session = TerminalSession::new(settings);
        session.settle(&mut store);

        assert_eq!(session.mode(), Mode::AwaitingConfirmation);
        assert!(lines(&session).contains(&"$ sujit-dev".to_string()));

        // Autotype runs once; a reset does not replay it
        session.handle(InputEvent::Interrupt);
        session.settle(&mut store);
        assert_eq!(session.mode(), Mode::Idle);
    }

    #[test]
    fn field_snapshots_share_the_submit_path() {
        let mut store = store();
        let mut session = ready(&mut store);
        let mut field = FieldInput::new();

        session.handle(InputEvent::Insert('m'));
        // The field echoes the keystroke just applied
        let echo = FieldEvent::Changed {
            value: "m".into(),
            caret: 1,
        };
        assert_eq!(field.translate(echo, session.buffer()), None);

        let typed = FieldEvent::Changed {
            value: "mona-qa".into(),
            caret: 7,
        };
        if let Some(event) = field.translate(typed, session.buffer()) {
            session.handle(event);
        }
        if let Some(event) = field.translate(FieldEvent::Submitted, session.buffer()) {
            session.handle(event);
        }
        session.settle(&mut store);

        assert_eq!(session.pending_profile_key(), Some("mona-qa"));
        assert_eq!(session.history().entries(), ["mona-qa"]);
    }

    #[test]
    fn empty_submit_does_nothing() {
        let mut store = store();
        let mut session = ready(&mut store);
        let before = session.output().len();
        type_text(&mut session, "   ");
        session.handle(InputEvent::Submit);
        session.settle(&mut store);
        assert_eq!(session.output().len(), before);
        assert!(session.history().entries().is_empty());
    }
}
