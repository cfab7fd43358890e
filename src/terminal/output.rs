//! Scrollback of printed lines.

/// Lines printed above the prompt.
///
/// `generation` increments on every clear so readers that stream new lines
/// (line mode) can tell a cleared screen from an unchanged one.
#[derive(Debug, Clone, Default)]
pub struct Output {
    lines: Vec<String>,
    generation: u64,
}

impl Output {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.generation += 1;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Streams lines out of an [`Output`] exactly once.
#[derive(Debug, Clone, Default)]
pub struct OutputCursor {
    seen: usize,
    generation: u64,
}

impl OutputCursor {
    /// Lines printed since the last call.
    pub fn drain<'a>(&mut self, output: &'a Output) -> &'a [String] {
        if output.generation() != self.generation {
            self.generation = output.generation();
            self.seen = 0;
        }
        let start = self.seen.min(output.len());
        self.seen = output.len();
        &output.lines()[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_yields_each_line_once() {
        let mut out = Output::default();
        let mut cursor = OutputCursor::default();

        out.push("a");
        out.push("b");
        assert_eq!(cursor.drain(&out), ["a", "b"]);
        assert!(cursor.drain(&out).is_empty());

        out.push("c");
        assert_eq!(cursor.drain(&out), ["c"]);
    }

    #[test]
    fn cursor_restarts_after_clear() {
        let mut out = Output::default();
        let mut cursor = OutputCursor::default();

        out.push("a");
        out.push("b");
        cursor.drain(&out);

        out.clear();
        out.push("fresh");
        assert_eq!(cursor.drain(&out), ["fresh"]);
    }
}
