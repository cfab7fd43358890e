//! Text input adapters
//!
//! Every way of typing at the prompt funnels into [`InputEvent`], the one
//! vocabulary the session understands. Two adapters produce it:
//!
//! - [`KeyInput`]: physical keyboard events from crossterm
//! - [`FieldInput`]: a text field that reports whole-value snapshots, as a
//!   touch keyboard or a line reader does
//!
//! The session never needs to know which adapter is in use.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::CommandBuffer;

/// A single edit or control request for the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Insert a printable character at the cursor
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    /// Step back through history
    Up,
    /// Step forward through history
    Down,
    /// Enter: submit, confirm, or skip an animation
    Submit,
    /// Ctrl+C / Cmd+C: abort everything
    Interrupt,
    /// Insert text in one operation (trimmed by the session)
    Paste(String),
    /// Replace the whole buffer and cursor
    Replace { value: String, caret: usize },
    /// Esc: skip the typing animation
    Skip,
}

/// Source of prompt input.
pub trait TextInput {
    /// Raw event type delivered by the platform
    type Raw;

    /// Translate one raw event, `None` if it carries no edit.
    fn translate(&mut self, raw: Self::Raw, buffer: &CommandBuffer) -> Option<InputEvent>;
}

/// Keyboard adapter for crossterm events.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyInput;

impl KeyInput {
    pub fn new() -> Self {
        Self
    }

    /// Map a key press to an input event.
    pub fn key(key: KeyEvent) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let command_held = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);

        match key.code {
            // === Abort ===
            KeyCode::Char('c') | KeyCode::Char('C') if command_held => Some(InputEvent::Interrupt),

            // === Editing ===
            KeyCode::Char(c) if !command_held && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(InputEvent::Insert(c))
            }
            KeyCode::Backspace => Some(InputEvent::Backspace),
            KeyCode::Delete => Some(InputEvent::Delete),

            // === Cursor and history ===
            KeyCode::Left => Some(InputEvent::Left),
            KeyCode::Right => Some(InputEvent::Right),
            KeyCode::Up => Some(InputEvent::Up),
            KeyCode::Down => Some(InputEvent::Down),

            // === Control ===
            KeyCode::Enter => Some(InputEvent::Submit),
            KeyCode::Esc => Some(InputEvent::Skip),
            _ => None,
        }
    }
}

impl TextInput for KeyInput {
    type Raw = Event;

    fn translate(&mut self, raw: Event, _buffer: &CommandBuffer) -> Option<InputEvent> {
        match raw {
            Event::Key(key) => Self::key(key),
            Event::Paste(text) => Some(InputEvent::Paste(text)),
            _ => None,
        }
    }
}

/// What a text field reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The field's full value and caret after an edit
    Changed { value: String, caret: usize },
    /// The field's submit action (Go/Enter on a soft keyboard)
    Submitted,
    /// A paste into the field
    Pasted(String),
    /// An interrupt gesture
    Interrupted,
}

/// Adapter for whole-field snapshots.
///
/// A snapshot identical to the current buffer and cursor is the field
/// echoing an edit the session already applied, and is dropped so the edit
/// is not processed twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldInput;

impl FieldInput {
    pub fn new() -> Self {
        Self
    }
}

impl TextInput for FieldInput {
    type Raw = FieldEvent;

    fn translate(&mut self, raw: FieldEvent, buffer: &CommandBuffer) -> Option<InputEvent> {
        match raw {
            FieldEvent::Changed { value, caret } => {
                if value == buffer.text() && caret == buffer.cursor() {
                    None
                } else {
                    Some(InputEvent::Replace { value, caret })
                }
            }
            FieldEvent::Submitted => Some(InputEvent::Submit),
            FieldEvent::Pasted(text) => Some(InputEvent::Paste(text)),
            FieldEvent::Interrupted => Some(InputEvent::Interrupt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_keys_insert() {
        assert_eq!(
            KeyInput::key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(InputEvent::Insert('a'))
        );
        assert_eq!(
            KeyInput::key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputEvent::Insert('A'))
        );
    }

    #[test]
    fn ctrl_c_and_cmd_c_interrupt() {
        assert_eq!(
            KeyInput::key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Interrupt)
        );
        assert_eq!(
            KeyInput::key(press(KeyCode::Char('C'), KeyModifiers::SUPER)),
            Some(InputEvent::Interrupt)
        );
    }

    #[test]
    fn other_control_chords_are_ignored() {
        assert_eq!(
            KeyInput::key(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            KeyInput::key(press(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(KeyInput::key(key), None);
    }

    #[test]
    fn navigation_keys_map() {
        let cases = [
            (KeyCode::Enter, InputEvent::Submit),
            (KeyCode::Esc, InputEvent::Skip),
            (KeyCode::Backspace, InputEvent::Backspace),
            (KeyCode::Delete, InputEvent::Delete),
            (KeyCode::Up, InputEvent::Up),
            (KeyCode::Down, InputEvent::Down),
            (KeyCode::Left, InputEvent::Left),
            (KeyCode::Right, InputEvent::Right),
        ];
        for (code, expected) in cases {
            assert_eq!(KeyInput::key(press(code, KeyModifiers::NONE)), Some(expected));
        }
    }

    #[test]
    fn paste_event_passes_through() {
        let buffer = CommandBuffer::new();
        let event = KeyInput::new().translate(Event::Paste("mona-qa".into()), &buffer);
        assert_eq!(event, Some(InputEvent::Paste("mona-qa".into())));
    }

    #[test]
    fn field_snapshot_mirroring_buffer_is_dropped() {
        let mut buffer = CommandBuffer::new();
        buffer.set("help");
        let mut field = FieldInput::new();

        let echo = FieldEvent::Changed {
            value: "help".into(),
            caret: 4,
        };
        assert_eq!(field.translate(echo, &buffer), None);
    }

    #[test]
    fn field_snapshot_with_moved_caret_is_applied() {
        let mut buffer = CommandBuffer::new();
        buffer.set("help");
        let mut field = FieldInput::new();

        let moved = FieldEvent::Changed {
            value: "help".into(),
            caret: 1,
        };
        assert_eq!(
            field.translate(moved, &buffer),
            Some(InputEvent::Replace {
                value: "help".into(),
                caret: 1
            })
        );
    }

    #[test]
    fn field_submit_routes_to_submit() {
        let buffer = CommandBuffer::new();
        assert_eq!(
            FieldInput::new().translate(FieldEvent::Submitted, &buffer),
            Some(InputEvent::Submit)
        );
    }
}
