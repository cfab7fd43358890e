//! folio - interactive terminal landing for developer and QA portfolios
//!
//! A scripted terminal prompt picks a profile, then the matching portfolio
//! view renders it. The active selection survives restarts in a small state
//! file.

pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod profile;
pub mod route;
pub mod scheduler;
pub mod server_log;
pub mod storage;
pub mod terminal;
pub mod tui;

pub use config::Config;
pub use profile::{PortfolioProfile, ProfileStore, ProfileType};
pub use route::Route;
pub use tui::theme;
