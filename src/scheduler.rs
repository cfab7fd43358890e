//! Virtual-clock step scheduler
//!
//! A single ordered queue of timed steps per session. Steps are plain data
//! (the caller's action type), so cancelling everything is one call and a
//! torn-down session can never be mutated by a stale step.
//!
//! Time is a `Duration` since the session started. The caller drives the
//! clock: the TUI feeds wall-clock elapsed time, tests and line mode jump
//! straight to the next due step.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Entry<A> {
    due: Duration,
    seq: u64,
    action: A,
}

/// Ordered queue of `(due, action)` pairs.
///
/// Delays passed to [`Scheduler::schedule`] are measured from the cursor:
/// the due time of the step currently being executed, or the last time the
/// clock was advanced to. Chained steps therefore keep their exact spacing
/// regardless of how late the driver polls.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    queue: Vec<Entry<A>>,
    cursor: Duration,
    next_seq: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            cursor: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Queue `action` to run `delay` after the cursor.
    pub fn schedule(&mut self, delay: Duration, action: A) {
        let due = self.cursor + delay;
        let seq = self.next_seq;
        self.next_seq += 1;

        // Stable insert: equal due times run in scheduling order
        let idx = self
            .queue
            .partition_point(|e| (e.due, e.seq) <= (due, seq));
        self.queue.insert(idx, Entry { due, seq, action });
    }

    /// Pop the earliest step that is due at `now`, moving the cursor to its
    /// due time.
    pub fn pop_due(&mut self, now: Duration) -> Option<A> {
        if self.queue.first().is_some_and(|e| e.due <= now) {
            let entry = self.queue.remove(0);
            self.cursor = entry.due;
            Some(entry.action)
        } else {
            None
        }
    }

    /// Move the cursor to `now` once all due steps have run.
    pub fn advance_to(&mut self, now: Duration) {
        if now > self.cursor {
            self.cursor = now;
        }
    }

    /// Drop every queued step. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Due time of the earliest queued step.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.first().map(|e| e.due)
    }

    pub fn now(&self) -> Duration {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
