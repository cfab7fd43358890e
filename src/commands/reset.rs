//! Forget the active profile

use anyhow::{Context, Result};

use folio::theme::current_theme;
use folio::ProfileStore;

pub fn handle(store: &mut ProfileStore) -> Result<()> {
    store.clear().context("Failed to clear the active profile")?;
    tracing::info!("Active profile cleared");
    println!("{}", current_theme().success_text("Active profile cleared."));
    Ok(())
}
