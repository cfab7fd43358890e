//! TUI (Text User Interface) module for folio
//!
//! Full-screen views drawn with ratatui/crossterm: the landing terminal and
//! the developer and QA portfolio pages.

pub mod app;
pub mod portfolio_app;
pub mod terminal_app;
pub mod theme;
pub mod ui;

pub use app::{App, TuiApp, ViewExit};
pub use portfolio_app::{PortfolioApp, PortfolioView};
pub use terminal_app::TerminalApp;
pub use theme::current_theme;
