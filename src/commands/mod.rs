//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod profiles;
pub mod reset;
pub mod show;
pub mod status;
pub mod terminal;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use folio::profile::ProfileRegistry;
use folio::storage::FileStore;
use folio::{Config, ProfileStore};

/// Open the profile store on the configured state file, or on `state_file`
/// when given.
pub fn open_store(config: &Config, state_file: Option<&Path>) -> Result<ProfileStore> {
    let path = match state_file {
        Some(path) => path.to_path_buf(),
        None => config.storage.state_file()?,
    };
    let storage = FileStore::open(&path)
        .with_context(|| format!("Failed to open state file {}", path.display()))?;
    let registry = ProfileRegistry::builtin().context("Built-in profiles are invalid")?;
    let store = ProfileStore::new(registry, Box::new(storage))?;
    Ok(store)
}

/// Local date used for durations and the copyright year.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
