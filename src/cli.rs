//! Command-line interface definition
//!
//! Lives in the library so the xtask can render man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FOLIO_BUILD_DATE"), ")");

/// Interactive terminal landing for developer and QA portfolios.
#[derive(Parser, Debug)]
#[command(name = "folio", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Read commands line by line from stdin and print plain text
    ///
    /// Chosen automatically when stdin is not a terminal.
    #[arg(long)]
    pub plain: bool,

    /// Type this command automatically once the banner has printed
    #[arg(long, value_name = "CMD")]
    pub autotype: Option<String>,

    /// State file holding the active profile (overrides the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered profiles
    Profiles,

    /// Print a profile page as plain text
    Show {
        /// Profile key, short form accepted (e.g. sujit-dev). Defaults to
        /// the active profile.
        key: Option<String>,
    },

    /// Open a view by path, e.g. /portfolio-qa
    Open {
        /// View path; unknown paths open the terminal
        path: String,
    },

    /// Show the active profile and the view it opens
    Status,

    /// Forget the active profile
    Reset,

    /// Inspect or update the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add fields missing from the config file
    Migrate {
        /// Apply without asking
        #[arg(long, short)]
        yes: bool,
    },
}
