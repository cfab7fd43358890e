//! Simulated server log
//!
//! A decorative, scripted sequence of "server" lines shown next to the
//! developer portfolio. The script mixes fixed startup messages, a small
//! `server.js` listing built from the active profile, and a summary. When
//! the script ends it waits and starts over.

use std::time::Duration;

use crate::profile::PortfolioProfile;
use crate::scheduler::Scheduler;

/// Tuning for the log cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerLogSettings {
    /// Pause between the last line and the restart
    pub restart_delay: Duration,
    /// Maximum number of skills listed in the code block
    pub skill_limit: usize,
}

impl Default for ServerLogSettings {
    fn default() -> Self {
        Self {
            restart_delay: Duration::from_millis(2000),
            skill_limit: 8,
        }
    }
}

/// One scripted line and when it appears, relative to the cycle start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub at: Duration,
    pub text: String,
    /// Code lines are printed verbatim, without a timestamp
    pub code: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LogStep {
    Emit(usize),
    Restart,
}

/// Local wall-clock time as `HH:MM:SS`.
fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Build the script for `profile`.
///
/// The returned lines are sorted by `at`. The cycle length (when the last
/// line has been shown) is returned alongside.
pub fn build_script(profile: &PortfolioProfile, skill_limit: usize) -> (Vec<ScriptLine>, Duration) {
    let mut lines = Vec::new();
    let mut add = |ms: u64, text: String, code: bool| {
        lines.push(ScriptLine {
            at: Duration::from_millis(ms),
            text,
            code,
        });
    };

    // Startup
    add(0, "🚀 Starting Node.js server...".into(), false);
    add(1500, "📦 Loading dependencies...".into(), false);
    add(3000, "✅ Express server initialized".into(), false);
    add(4500, "🌐 Server listening on http://localhost:4000".into(), false);
    add(6000, "📡 Handling incoming request...".into(), false);
    add(7500, "🔄 Rendering terminal application...".into(), false);

    // server.js listing
    add(9000, String::new(), true);
    add(9500, "// server.js".into(), true);
    add(10000, String::new(), true);
    add(11000, format!("const developer = '{}';", profile.name), true);
    add(11500, String::new(), true);

    let skills = profile.unique_technologies(skill_limit);
    let step = |n: usize| 12000 + n as u64 * 800;
    add(12000, "const skills = [".into(), true);
    for (i, skill) in skills.iter().enumerate() {
        let comma = if i + 1 == skills.len() { "" } else { "," };
        add(step(i + 1), format!("    '{}'{}", skill, comma), true);
    }
    add(step(skills.len() + 1), "];".into(), true);
    add(step(skills.len() + 2), String::new(), true);
    add(step(skills.len() + 3), "console.log('Ready to build!');".into(), true);
    add(step(skills.len() + 4), String::new(), true);

    // Execution summary
    let output = step(skills.len() + 5);
    add(output, "> Ready to build!".into(), true);
    add(output + 1000, String::new(), true);
    add(output + 2000, format!("📊 Developer: {}", profile.name), false);
    add(output + 3500, format!("📝 Title: {}", profile.title), false);
    add(
        output + 5000,
        format!("💼 Experience: {} positions", profile.work_experience.len()),
        false,
    );
    add(
        output + 6500,
        format!("🎯 Projects: {} items", profile.portfolio_items.len()),
        false,
    );
    add(
        output + 8000,
        format!("🛠️  Skills: {} technologies", skills.len()),
        false,
    );
    add(output + 9500, "✅ Portfolio data loaded successfully".into(), false);
    add(output + 11000, "🎨 Rendering components...".into(), false);
    add(output + 12500, "✨ SSR complete - Page ready".into(), false);

    (lines, Duration::from_millis(output + 14000))
}

/// Playback of the log script on its own scheduler.
#[derive(Debug)]
pub struct ServerLog {
    script: Vec<ScriptLine>,
    cycle: Duration,
    settings: ServerLogSettings,
    lines: Vec<String>,
    scheduler: Scheduler<LogStep>,
    clock: fn() -> String,
    cycles: u32,
}

impl ServerLog {
    /// Start playing the script for `profile` from time zero.
    pub fn new(profile: &PortfolioProfile, settings: ServerLogSettings) -> Self {
        let (script, cycle) = build_script(profile, settings.skill_limit);
        let mut log = Self {
            script,
            cycle,
            settings,
            lines: Vec::new(),
            scheduler: Scheduler::new(),
            clock: local_timestamp,
            cycles: 0,
        };
        log.start();
        log
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of completed restarts.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Emit every line due at `now`.
    pub fn advance(&mut self, now: Duration) {
        while let Some(step) = self.scheduler.pop_due(now) {
            match step {
                LogStep::Emit(i) => self.emit(i),
                LogStep::Restart => {
                    self.cycles += 1;
                    tracing::debug!(cycle = self.cycles, "Restarting server log");
                    self.start();
                }
            }
        }
        self.scheduler.advance_to(now);
    }

    /// Cancel everything queued. The log stays as printed.
    pub fn stop(&mut self) {
        self.scheduler.cancel_all();
    }

    fn start(&mut self) {
        self.scheduler.cancel_all();
        self.lines.clear();
        for (i, line) in self.script.iter().enumerate() {
            self.scheduler.schedule(line.at, LogStep::Emit(i));
        }
        self.scheduler
            .schedule(self.cycle + self.settings.restart_delay, LogStep::Restart);
    }

    fn emit(&mut self, i: usize) {
        let Some(line) = self.script.get(i) else {
            return;
        };
        if line.code {
            self.lines.push(line.text.clone());
        } else {
            self.lines.push(format!("[{}] {}", (self.clock)(), line.text));
        }
    }
}
