//! Interactive terminal landing
//!
//! The prompt a visitor types a profile name into. Split into:
//! - `buffer`: the edited line and its cursor
//! - `history`: unique command history with browse/restore
//! - `input`: keyboard and text-field adapters producing [`InputEvent`]
//! - `command`: the command grammar
//! - `output`: printed lines
//! - `session`: the state machine tying them together

mod buffer;
mod command;
pub mod history;
mod input;
mod output;
mod session;

pub use buffer::CommandBuffer;
pub use command::Command;
pub use history::History;
pub use input::{FieldEvent, FieldInput, InputEvent, KeyInput, TextInput};
pub use output::{Output, OutputCursor};
pub use session::{Mode, SessionSettings, Step, TerminalSession, Timings, BANNER};
