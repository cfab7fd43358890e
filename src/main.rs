//! folio - interactive terminal landing for developer and QA portfolios

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::{Cli, Commands, ConfigCommands};
use folio::{logging, Config, Route};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;

    if let Some(path) = logging::default_log_path() {
        if let Err(e) = logging::init(&path, &config.logging.level) {
            eprintln!("Warning: logging disabled: {:#}", e);
        }
    }

    let state_file = cli.state_file.as_deref();
    match cli.command {
        None => {
            let store = commands::open_store(&config, state_file)?;
            commands::terminal::handle(&config, store, cli.plain, cli.autotype, Route::Terminal)
        }
        Some(Commands::Open { path }) => {
            let store = commands::open_store(&config, state_file)?;
            let route = Route::from_path(&path);
            commands::terminal::handle(&config, store, cli.plain, cli.autotype, route)
        }
        Some(Commands::Profiles) => {
            let store = commands::open_store(&config, state_file)?;
            commands::profiles::handle(&store)
        }
        Some(Commands::Show { key }) => {
            let store = commands::open_store(&config, state_file)?;
            commands::show::handle(&store, key.as_deref())
        }
        Some(Commands::Status) => {
            let store = commands::open_store(&config, state_file)?;
            commands::status::handle(&store)
        }
        Some(Commands::Reset) => {
            let mut store = commands::open_store(&config, state_file)?;
            commands::reset::handle(&mut store)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
