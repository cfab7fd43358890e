//! Show the active profile

use anyhow::Result;

use folio::profile::ACTIVE_PROFILE_KEY;
use folio::theme::current_theme;
use folio::{ProfileStore, Route};

/// Status lines: key (marked when nothing is persisted), name, view path.
pub fn status_lines(store: &ProfileStore) -> Result<Vec<String>> {
    let persisted = store.storage().get(ACTIVE_PROFILE_KEY)?;
    let key = store.active_key();
    let profile = store.active_profile(None, None);

    let key_line = match persisted {
        Some(_) => format!("Active profile: {}", key),
        None => format!("Active profile: {} (default)", key),
    };
    Ok(vec![
        key_line,
        format!("Name: {}", profile.name),
        format!("View: {}", Route::for_key(&key)),
    ])
}

pub fn handle(store: &ProfileStore) -> Result<()> {
    let theme = current_theme();
    for line in status_lines(store)? {
        println!("{}", theme.primary_text(&line));
    }
    Ok(())
}
