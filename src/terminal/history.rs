//! Command history with browse-and-restore.

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Unique commands, oldest first.
///
/// Re-submitting a command moves it to the end. While browsing, the live
/// buffer is held aside and handed back when the user steps past the most
/// recent entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    limit: usize,
    /// Index into `entries` while browsing
    browsing: Option<usize>,
    pending_restore: String,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
            browsing: None,
            pending_restore: String::new(),
        }
    }

    /// Record a command. Blank commands are ignored.
    pub fn push(&mut self, command: &str) {
        let command = command.trim();
        if command.is_empty() {
            return;
        }
        self.entries.retain(|e| e != command);
        self.entries.push(command.to_string());
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cancel_browse();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_browsing(&self) -> bool {
        self.browsing.is_some()
    }

    /// Step one entry back. `live` is saved on the first step.
    ///
    /// Returns the entry to show, or `None` when already at the oldest entry
    /// or the history is empty.
    pub fn up(&mut self, live: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.browsing {
            None => {
                self.pending_restore = live.to_string();
                self.entries.len() - 1
            }
            Some(0) => return None,
            Some(idx) => idx - 1,
        };
        self.browsing = Some(idx);
        self.entries.get(idx).map(String::as_str)
    }

    /// Step one entry forward.
    ///
    /// Stepping past the most recent entry ends browsing and returns the
    /// saved live buffer. Returns `None` when not browsing.
    pub fn down(&mut self) -> Option<String> {
        let idx = self.browsing?;
        if idx + 1 < self.entries.len() {
            self.browsing = Some(idx + 1);
            self.entries.get(idx + 1).cloned()
        } else {
            self.browsing = None;
            Some(std::mem::take(&mut self.pending_restore))
        }
    }

    /// Stop browsing and forget the saved live buffer.
    pub fn cancel_browse(&mut self) {
        self.browsing = None;
        self.pending_restore.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resubmission_moves_entry_to_end() {
        let mut h = History::default();
        h.push("a");
        h.push("b");
        h.push("a");
        assert_eq!(h.entries(), ["b", "a"]);
    }

    #[test]
    fn blank_commands_are_ignored() {
        let mut h = History::default();
        h.push("   ");
        h.push("");
        assert!(h.entries().is_empty());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut h = History::new(2);
        h.push("a");
        h.push("b");
        h.push("c");
        assert_eq!(h.entries(), ["b", "c"]);
    }

    #[test]
    fn up_then_down_restores_live_buffer() {
        let mut h = History::default();
        h.push("a");
        h.push("b");

        assert_eq!(h.up("draft"), Some("b"));
        assert_eq!(h.up("ignored"), Some("a"));
        assert_eq!(h.down(), Some("b".to_string()));
        assert_eq!(h.down(), Some("draft".to_string()));
        assert!(!h.is_browsing());
        assert_eq!(h.down(), None);
    }

    #[test]
    fn up_stops_at_oldest() {
        let mut h = History::default();
        h.push("only");
        assert_eq!(h.up(""), Some("only"));
        assert_eq!(h.up(""), None);
        assert!(h.is_browsing());
    }

    #[test]
    fn up_on_empty_history_is_noop() {
        let mut h = History::default();
        assert_eq!(h.up("x"), None);
        assert!(!h.is_browsing());
    }

    #[test]
    fn cancel_browse_discards_saved_buffer() {
        let mut h = History::default();
        h.push("a");
        h.up("draft");
        h.cancel_browse();
        assert_eq!(h.down(), None);
    }
}
