//! Print a profile page as plain text

use anyhow::{Context, Result};

use folio::presentation::render_page;
use folio::profile::{full_key, infer_type};
use folio::ProfileStore;

use super::today;

/// Render the page for `key`, or for the active profile.
///
/// Read only: the persisted selection is not changed.
pub fn render(store: &ProfileStore, key: Option<&str>) -> Result<String> {
    let (profile, profile_type) = match key {
        Some(key) => {
            let key = full_key(key);
            let profile = store
                .require(&key)
                .with_context(|| format!("Available profiles: {}", store.short_keys().join(", ")))?
                .clone();
            (profile, infer_type(&key))
        }
        None => (
            store.active_profile(None, None),
            infer_type(&store.active_key()),
        ),
    };
    Ok(render_page(&profile, profile_type, today()))
}

pub fn handle(store: &ProfileStore, key: Option<&str>) -> Result<()> {
    print!("{}", render(store, key)?);
    Ok(())
}
