//! List registered profiles

use anyhow::Result;

use folio::profile::short_key;
use folio::theme::current_theme;
use folio::ProfileStore;

/// One row per profile: short key, name, type. The active one is marked.
pub fn format_profiles(store: &ProfileStore) -> Vec<String> {
    let active = store.active_key();
    store
        .list_profiles()
        .into_iter()
        .map(|id| {
            let marker = if id.key == active { "*" } else { " " };
            let name = store
                .get_profile(&id.key)
                .map(|p| p.name.as_str())
                .unwrap_or_default();
            format!(
                "{} {:<16} {:<24} {}",
                marker,
                short_key(&id.key),
                name,
                id.profile_type
            )
        })
        .collect()
}

pub fn handle(store: &ProfileStore) -> Result<()> {
    let theme = current_theme();
    for row in format_profiles(store) {
        if row.starts_with('*') {
            println!("{}", theme.accent_text(&row));
        } else {
            println!("{}", theme.primary_text(&row));
        }
    }
    Ok(())
}
